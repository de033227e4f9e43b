use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::executor::http::HttpError;

/// A completed round trip. Any status code, 4xx and 5xx included, lands here.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, Vec<String>>,
    /// `None` when the response body was empty.
    pub body: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("no endpoint specified")]
    MissingEndpoint,
    #[error("endpoint '{identifier}' not found in OpenAPI specification '{specification}'")]
    EndpointNotFound {
        identifier: String,
        specification: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
    #[error("failed to decode response body as JSON: {0}")]
    ResponseDecode(String),
}

/// Terminal result of one invocation attempt. Never anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    Done(InvocationResponse),
    Error(InvocationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Done,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Done => "Done",
            Outcome::Error => "Error",
        }
    }
}

/// Host-facing shape of an [`InvocationResult`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl InvocationResult {
    pub fn outcome(&self) -> Outcome {
        match self {
            InvocationResult::Done(_) => Outcome::Done,
            InvocationResult::Error(_) => Outcome::Error,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, InvocationResult::Done(_))
    }

    pub fn response(&self) -> Option<&InvocationResponse> {
        match self {
            InvocationResult::Done(r) => Some(r),
            InvocationResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&InvocationError> {
        match self {
            InvocationResult::Done(_) => None,
            InvocationResult::Error(e) => Some(e),
        }
    }

    pub fn to_record(&self) -> OutcomeRecord {
        match self {
            InvocationResult::Done(r) => OutcomeRecord {
                outcome: Outcome::Done,
                status_code: Some(r.status_code),
                headers: Some(r.headers.clone()),
                body: r.body.clone(),
                error_detail: None,
            },
            InvocationResult::Error(e) => OutcomeRecord {
                outcome: Outcome::Error,
                status_code: None,
                headers: None,
                body: None,
                error_detail: Some(e.to_string()),
            },
        }
    }
}

impl From<Result<InvocationResponse, InvocationError>> for InvocationResult {
    fn from(r: Result<InvocationResponse, InvocationError>) -> Self {
        match r {
            Ok(resp) => InvocationResult::Done(resp),
            Err(e) => InvocationResult::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn done_record_carries_status_headers_and_body() {
        let mut headers = BTreeMap::new();
        headers.insert("set-cookie".to_string(), vec!["a=1".to_string(), "b=2".to_string()]);
        let result = InvocationResult::Done(InvocationResponse {
            status_code: 404,
            headers,
            body: Some(json!({"error": "missing"})),
        });

        let record = serde_json::to_value(result.to_record()).unwrap();
        assert_eq!(
            record,
            json!({
                "outcome": "Done",
                "statusCode": 404,
                "headers": { "set-cookie": ["a=1", "b=2"] },
                "body": { "error": "missing" }
            })
        );
    }

    #[test]
    fn error_record_carries_detail_only() {
        let result = InvocationResult::Error(InvocationError::Transport(HttpError::Timeout));
        let record = serde_json::to_value(result.to_record()).unwrap();
        assert_eq!(
            record,
            json!({ "outcome": "Error", "errorDetail": "transport error: timeout" })
        );
    }
}
