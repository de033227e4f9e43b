use serde_json::Value as JsonValue;

use crate::request::ParamMap;

/// Per-call values for an activity, as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    /// `operationId` or `METHOD_path` key.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub headers: Option<ParamMap>,
    #[serde(default)]
    pub query_parameters: Option<ParamMap>,
    #[serde(default)]
    pub path_parameters: Option<ParamMap>,
    #[serde(default)]
    pub body: Option<JsonValue>,
}

impl ActivityInput {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(ParamMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters
            .get_or_insert_with(ParamMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(ParamMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}
