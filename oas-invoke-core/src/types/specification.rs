use std::path::PathBuf;

use crate::types::Endpoint;

/// One parsed API contract. Immutable once handed to the activity catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub title: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `servers[0].url`, when the document declares any server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Endpoints in declaration order (path order, then method order within a path item).
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,

    /// File the specification was parsed from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl Specification {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
            base_url: None,
            endpoints: Vec::new(),
            source: None,
        }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// See [`crate::resolve::resolve`].
    pub fn endpoint(&self, identifier: &str) -> Option<&Endpoint> {
        crate::resolve::resolve(self, identifier)
    }
}
