#![forbid(unsafe_code)]

//! Turns parsed OpenAPI endpoints into HTTP calls.
//!
//! Parsing and discovery live in `oas-invoke-core`; this crate builds requests, sends them,
//! and exposes one invokable activity per discovered specification.

pub mod activity;
pub mod executor;
pub mod request;
pub mod sanitize;

pub use crate::activity::{
    describe, ActivityCatalog, ActivityDescriptor, ActivityEntry, ActivityInput, ActivityProvider,
    CatalogFailure, InputDescriptor, OpenApiActivity, OutputDescriptor, SelectOption,
};
pub use crate::executor::{
    HttpClient, HttpError, HttpRequestParts, HttpResponseParts, InvocationError,
    InvocationResponse, InvocationResult, Invoker, InvokerConfig, Outcome, OutcomeRecord,
    ReqwestHttpClient,
};
pub use crate::request::{build_request, BuildOptions, BuiltRequest, ParamMap};
pub use tokio_util::sync::CancellationToken;
