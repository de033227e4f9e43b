use std::sync::Arc;

use oas_invoke_core::{resolve, Specification};
use tokio_util::sync::CancellationToken;

use crate::activity::input::ActivityInput;
use crate::executor::{InvocationError, InvocationResult, Invoker};
use crate::request::{build_request, BuildOptions, BuiltRequest, ParamMap};

/// Invocation entry point bound to one specification.
#[derive(Clone)]
pub struct OpenApiActivity {
    specification: Arc<Specification>,
    invoker: Arc<Invoker>,
    options: BuildOptions,
}

impl OpenApiActivity {
    pub fn new(specification: Arc<Specification>, invoker: Arc<Invoker>, options: BuildOptions) -> Self {
        Self {
            specification,
            invoker,
            options,
        }
    }

    pub fn specification(&self) -> &Specification {
        &self.specification
    }

    /// Resolve and build without sending.
    pub fn prepare(&self, input: &ActivityInput) -> Result<BuiltRequest, InvocationError> {
        let identifier = input
            .endpoint
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(InvocationError::MissingEndpoint)?;

        let endpoint = resolve(&self.specification, identifier).ok_or_else(|| {
            InvocationError::EndpointNotFound {
                identifier: identifier.to_string(),
                specification: self.specification.title.clone(),
            }
        })?;

        let empty = ParamMap::new();
        Ok(build_request(
            endpoint,
            self.specification.base_url.as_deref(),
            input.headers.as_ref().unwrap_or(&empty),
            input.query_parameters.as_ref().unwrap_or(&empty),
            input.path_parameters.as_ref().unwrap_or(&empty),
            input.body.as_ref(),
            &self.options,
        ))
    }

    /// Resolve, build and send. Always returns exactly one of Done / Error.
    pub async fn execute(&self, input: &ActivityInput, cancel: &CancellationToken) -> InvocationResult {
        let endpoint = input.endpoint.as_deref().unwrap_or_default();

        let request = match self.prepare(input) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    specification = %self.specification.title,
                    endpoint,
                    error = %e,
                    "OpenAPI activity could not resolve its endpoint"
                );
                return InvocationResult::Error(e);
            }
        };

        let result = self.invoker.invoke(&request, cancel).await;
        match &result {
            InvocationResult::Done(resp) => tracing::info!(
                specification = %self.specification.title,
                endpoint,
                status = resp.status_code,
                "OpenAPI call completed"
            ),
            InvocationResult::Error(e) => tracing::warn!(
                specification = %self.specification.title,
                endpoint,
                error = %e,
                "OpenAPI call failed"
            ),
        }
        result
    }
}
