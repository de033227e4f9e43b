use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::types::{HttpMethod, Parameter, ParameterLocation, RequestBody, Response};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}/]+)\}").expect("valid regex"));

/// One method + path operation of a specification.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// URI template, e.g. `/pets/{id}`.
    pub path: String,

    pub method: HttpMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Keyed by the raw status-code string, including `default` and `2XX` style keys.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, Response>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            operation_id: None,
            summary: None,
            description: None,
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    /// Synthesized `"{METHOD}_{path}"` key, e.g. `POST_/pets`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.method.as_str(), self.path)
    }

    /// The identifier a caller would normally use: `operationId` if declared, otherwise [`Endpoint::key`].
    pub fn identifier(&self) -> String {
        match &self.operation_id {
            Some(id) => id.clone(),
            None => self.key(),
        }
    }

    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.location == location)
    }

    /// `{name}` placeholders of the path template, in order of appearance.
    pub fn placeholders(&self) -> Vec<String> {
        PLACEHOLDER_RE
            .captures_iter(&self.path)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Placeholders with no matching `in: path` parameter.
    pub fn unbound_placeholders(&self) -> Vec<String> {
        self.placeholders()
            .into_iter()
            .filter(|name| !self.parameters_in(ParameterLocation::Path).any(|p| &p.name == name))
            .collect()
    }
}
