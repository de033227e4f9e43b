#![forbid(unsafe_code)]

pub mod discovery;
pub mod error;
pub mod parser;
pub mod resolve;
pub mod types;
pub mod validate;

pub use crate::discovery::{discover, discover_with, DiscoveryFailure, DiscoveryOptions, DiscoveryReport};
pub use crate::error::{DocumentError, ParseError};
pub use crate::parser::{parse_document_str, parse_file, DocumentFormat};
pub use crate::resolve::resolve;
pub use crate::types::{
    ContentMap, Endpoint, HttpMethod, MediaType, Parameter, ParameterLocation, RequestBody,
    Response, Specification,
};
pub use crate::validate::{lint_specification, PathTemplateIssue};
