pub mod http;
mod invoker;
mod result;
mod types;

pub use http::{HttpClient, HttpError, HttpRequestParts, HttpResponseParts, ReqwestHttpClient};
pub use invoker::Invoker;
pub use result::{InvocationError, InvocationResponse, InvocationResult, Outcome, OutcomeRecord};
pub use types::InvokerConfig;
