use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{DocumentError, ParseError};
use crate::types::{HttpMethod, Specification};

mod fields;
mod operation;

use fields::{optional_str, pointer_token, required_str};
use operation::parse_endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` files are YAML, everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Reads and parses one document file. The returned specification remembers its `source`.
pub fn parse_file(path: &Path) -> Result<Specification, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut spec = parse_document_str(&content, DocumentFormat::from_path(path)).map_err(|source| {
        DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    spec.source = Some(path.to_path_buf());
    Ok(spec)
}

pub fn parse_document_str(input: &str, format: DocumentFormat) -> Result<Specification, ParseError> {
    let raw = load_value(input, format)?;
    specification_from_value(&raw)
}

fn load_value(input: &str, format: DocumentFormat) -> Result<Value, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str::<Value>(input)?),
        DocumentFormat::Yaml => yaml_to_json(input),
        DocumentFormat::Auto => {
            let trimmed = input.trim_start();
            if trimmed.is_empty() {
                return Err(ParseError::UnknownFormat);
            }
            if trimmed.starts_with('{') {
                Ok(serde_json::from_str::<Value>(input)?)
            } else {
                yaml_to_json(input)
            }
        }
    }
}

fn yaml_to_json(input: &str) -> Result<Value, ParseError> {
    // Going through serde_yaml::Value keeps unquoted numeric keys (`200:`) usable as map keys.
    let y = serde_yaml::from_str::<serde_yaml::Value>(input)?;
    serde_json::to_value(y).map_err(ParseError::from)
}

fn specification_from_value(root: &Value) -> Result<Specification, ParseError> {
    let root = root
        .as_object()
        .ok_or_else(|| ParseError::invalid("/", "an object"))?;

    let info = root
        .get("info")
        .ok_or_else(|| ParseError::missing("/info"))?
        .as_object()
        .ok_or_else(|| ParseError::invalid("/info", "an object"))?;

    let mut spec = Specification::new(
        required_str(info, "title", "/info")?,
        required_str(info, "version", "/info")?,
    );
    spec.description = optional_str(info, "description", "/info")?;
    spec.base_url = first_server_url(root)?;

    let Some(paths) = root.get("paths") else {
        return Ok(spec);
    };
    let paths = paths
        .as_object()
        .ok_or_else(|| ParseError::invalid("/paths", "an object"))?;

    for (path, item) in paths {
        let item_ptr = format!("/paths/{}", pointer_token(path));
        let item = item
            .as_object()
            .ok_or_else(|| ParseError::invalid(item_ptr.clone(), "an object"))?;
        let shared_params = item.get("parameters");

        for (key, operation) in item {
            // Unknown keys (`summary`, `servers`, `trace`, `x-*`, ...) are not operations.
            let Some(method) = HttpMethod::parse(key) else {
                continue;
            };
            let op_ptr = format!("{item_ptr}/{}", pointer_token(key));
            spec.endpoints
                .push(parse_endpoint(path, method, operation, shared_params, &item_ptr, &op_ptr)?);
        }
    }

    Ok(spec)
}

fn first_server_url(root: &Map<String, Value>) -> Result<Option<String>, ParseError> {
    let Some(servers) = root.get("servers").and_then(|v| v.as_array()) else {
        return Ok(None);
    };
    let Some(first) = servers.first() else {
        return Ok(None);
    };
    let first = first
        .as_object()
        .ok_or_else(|| ParseError::invalid("/servers/0", "an object"))?;
    required_str(first, "url", "/servers/0").map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_uses_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), DocumentFormat::Json);
    }

    #[test]
    fn auto_rejects_empty_input() {
        assert!(matches!(
            parse_document_str("   \n", DocumentFormat::Auto),
            Err(ParseError::UnknownFormat)
        ));
    }

    #[test]
    fn empty_servers_leave_base_url_unset() {
        let spec = parse_document_str(
            r#"{"info":{"title":"T","version":"1"},"servers":[]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(spec.base_url, None);
        assert!(spec.endpoints.is_empty());
    }
}
