use std::sync::Arc;

use serde_json::Value as JsonValue;
use tokio_util::sync::CancellationToken;

use crate::executor::http::{HttpClient, HttpError, HttpRequestParts, ReqwestHttpClient};
use crate::executor::result::{InvocationError, InvocationResponse, InvocationResult};
use crate::executor::types::InvokerConfig;
use crate::request::{join_url, BuiltRequest};
use crate::sanitize::sanitize_headers;

/// Sends built requests and normalizes what comes back. Shared across concurrent invocations.
pub struct Invoker {
    http: Arc<dyn HttpClient>,
    config: InvokerConfig,
}

impl Invoker {
    pub fn new(http: Arc<dyn HttpClient>, config: InvokerConfig) -> Self {
        Self { http, config }
    }

    /// An invoker over a reqwest client configured from `config`.
    pub fn with_reqwest(config: InvokerConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::new(&config.user_agent)?;
        Ok(Self::new(Arc::new(http), config))
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    /// Never fails: transport, cancellation and decode problems become [`InvocationResult::Error`].
    pub async fn invoke(&self, request: &BuiltRequest, cancel: &CancellationToken) -> InvocationResult {
        self.try_invoke(request, cancel).await.into()
    }

    async fn try_invoke(
        &self,
        request: &BuiltRequest,
        cancel: &CancellationToken,
    ) -> Result<InvocationResponse, InvocationError> {
        let url = self.resolve_url(&request.url)?;

        tracing::debug!(
            method = %request.method,
            url = %url,
            headers = ?sanitize_headers(&request.headers, &self.config.sensitive_headers),
            has_body = request.body.is_some(),
            "sending OpenAPI request"
        );

        let parts = HttpRequestParts {
            method: request.method,
            url,
            headers: request.headers.clone(),
            body: request.body.as_ref().map(|b| b.as_bytes().to_vec()),
        };

        if cancel.is_cancelled() {
            return Err(HttpError::Cancelled.into());
        }

        let resp = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HttpError::Cancelled.into()),
            sent = self.http.send(parts, self.config.timeout, self.config.max_response_bytes) => sent?,
        };

        Ok(InvocationResponse {
            status_code: resp.status,
            headers: resp.headers,
            body: decode_body(&resp.body)?,
        })
    }

    fn resolve_url(&self, raw: &str) -> Result<url::Url, HttpError> {
        match url::Url::parse(raw) {
            Ok(u) => Ok(u),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let Some(base) = &self.config.default_base_url else {
                    return Err(HttpError::InvalidUrl {
                        url: raw.to_string(),
                        reason: "relative URL and no default base URL configured".to_string(),
                    });
                };
                let joined = join_url(base.as_str(), raw);
                url::Url::parse(&joined).map_err(|e| HttpError::InvalidUrl {
                    url: joined,
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(HttpError::InvalidUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

fn decode_body(body: &[u8]) -> Result<Option<JsonValue>, InvocationError> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice::<JsonValue>(body)
        .map(Some)
        .map_err(|e| InvocationError::ResponseDecode(e.to_string()))
}
