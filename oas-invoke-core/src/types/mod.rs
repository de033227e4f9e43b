mod endpoint;
mod media;
mod method;
mod parameter;
mod specification;

pub use endpoint::Endpoint;
pub use media::{ContentMap, MediaType, RequestBody, Response};
pub use method::HttpMethod;
pub use parameter::{Parameter, ParameterLocation};
pub use specification::Specification;
