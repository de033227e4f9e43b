use std::path::PathBuf;

use thiserror::Error;

/// A document could not be turned into a [`crate::Specification`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unable to auto-detect document format (neither valid JSON nor valid YAML)")]
    UnknownFormat,
    #[error("missing required field '{pointer}'")]
    MissingField { pointer: String },
    #[error("field '{pointer}' must be {expected}")]
    InvalidField {
        pointer: String,
        expected: &'static str,
    },
}

impl ParseError {
    pub(crate) fn missing(pointer: impl Into<String>) -> Self {
        Self::MissingField {
            pointer: pointer.into(),
        }
    }

    pub(crate) fn invalid(pointer: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            pointer: pointer.into(),
            expected,
        }
    }
}

/// Failure to load one document file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl DocumentError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            DocumentError::Read { path, .. } | DocumentError::Parse { path, .. } => path,
        }
    }
}
