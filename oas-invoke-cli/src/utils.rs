use std::path::Path;

use oas_invoke_core::DiscoveryOptions;
use oas_invoke_exec::ParamMap;
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;

use crate::SpecsArgs;

pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn discovery_options(specs: &SpecsArgs) -> DiscoveryOptions {
    let options = DiscoveryOptions::default();
    if specs.include_yaml {
        options.with_yaml()
    } else {
        options
    }
}

/// `KEY=VALUE` arguments in the order given. Later duplicates overwrite earlier values.
pub fn parse_pairs(flag: &str, raw: &[String]) -> Result<ParamMap, String> {
    let mut out = ParamMap::new();
    for s in raw {
        let Some((k, v)) = s.split_once('=') else {
            return Err(format!("--{flag} expects KEY=VALUE, got '{s}'"));
        };
        if k.is_empty() {
            return Err(format!("--{flag} has an empty key in '{s}'"));
        }
        out.insert(k.to_string(), v.to_string());
    }
    Ok(out)
}

/// Inline JSON, or `@path` to read JSON from a file.
pub fn read_body(raw: &str) -> Result<JsonValue, String> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .map_err(|e| format!("failed to read body file {path}: {e}"))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| format!("body is not valid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_keep_order_and_split_on_first_equals() {
        let raw = vec!["b=2".to_string(), "a=x=y".to_string()];
        let map = parse_pairs("query", &raw).unwrap();
        let got: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(got, vec![("b", "2"), ("a", "x=y")]);
    }

    #[test]
    fn pairs_without_equals_are_rejected() {
        let err = parse_pairs("header", &["Accept".to_string()]).unwrap_err();
        assert!(err.contains("--header"));
        assert!(parse_pairs("path", &["=1".to_string()]).is_err());
    }

    #[test]
    fn body_reads_inline_and_file_json() {
        assert_eq!(read_body(r#"{"a":1}"#).unwrap(), serde_json::json!({"a": 1}));

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("body.json");
        std::fs::write(&file, "[true]").unwrap();
        let arg = format!("@{}", file.display());
        assert_eq!(read_body(&arg).unwrap(), serde_json::json!([true]));

        assert!(read_body("not json").is_err());
    }
}
