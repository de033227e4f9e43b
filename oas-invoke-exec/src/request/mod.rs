use indexmap::IndexMap;
use oas_invoke_core::{Endpoint, HttpMethod};
use serde_json::Value as JsonValue;

/// Caller-supplied string parameters, iterated in insertion order.
pub type ParamMap = IndexMap<String, String>;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Percent-encode substituted path values. Off by default: values are inserted verbatim,
    /// so a value containing `/` or `?` changes the shape of the URL.
    pub escape_path_values: bool,
}

/// A fully assembled request, not yet bound to a transport.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BuiltRequest {
    pub method: HttpMethod,
    /// Absolute when the specification declared a base URL, otherwise the relative path + query.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body; only ever set for POST/PUT/PATCH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Assembles the request for `endpoint`. Pure: identical inputs give identical output.
///
/// Unsupplied `{placeholders}` stay in the path verbatim. Headers are attached without
/// validation. A body supplied for GET/DELETE/HEAD/OPTIONS is dropped.
#[allow(clippy::too_many_arguments)]
pub fn build_request(
    endpoint: &Endpoint,
    base_url: Option<&str>,
    headers: &ParamMap,
    query: &ParamMap,
    path_params: &ParamMap,
    body: Option<&JsonValue>,
    options: &BuildOptions,
) -> BuiltRequest {
    let mut path = substitute_path(&endpoint.path, path_params, options.escape_path_values);
    append_query(&mut path, query);

    let url = match base_url {
        Some(base) if !base.is_empty() => join_url(base, &path),
        _ => path,
    };

    let mut headers: Vec<(String, String)> = headers
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let body = match body {
        Some(value) if endpoint.method.allows_body() => {
            headers.retain(|(k, _)| !k.eq_ignore_ascii_case("content-type"));
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
            Some(value.to_string())
        }
        _ => None,
    };

    BuiltRequest {
        method: endpoint.method,
        url,
        headers,
        body,
    }
}

fn substitute_path(template: &str, path_params: &ParamMap, escape: bool) -> String {
    let mut path = template.to_string();
    for (k, v) in path_params {
        let value = if escape {
            urlencoding::encode(v).into_owned()
        } else {
            v.clone()
        };
        path = path.replace(&format!("{{{k}}}"), &value);
    }
    path
}

fn append_query(path: &mut String, query: &ParamMap) {
    if query.is_empty() {
        return;
    }
    let qs = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    path.push('?');
    path.push_str(&qs);
}

/// `{base}{path}` with exactly one `/` between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("https://a.example/v1/", "/pets"), "https://a.example/v1/pets");
        assert_eq!(join_url("https://a.example/v1", "pets"), "https://a.example/v1/pets");
        assert_eq!(join_url("https://a.example", "/pets?x=1"), "https://a.example/pets?x=1");
        assert_eq!(join_url("https://a.example/", ""), "https://a.example");
    }

    #[test]
    fn substitute_path_replaces_every_occurrence() {
        let mut params = ParamMap::new();
        params.insert("id".to_string(), "7".to_string());
        assert_eq!(substitute_path("/a/{id}/b/{id}", &params, false), "/a/7/b/7");
    }

    #[test]
    fn query_values_are_percent_encoded_in_caller_order() {
        let mut q = ParamMap::new();
        q.insert("z".to_string(), "a b".to_string());
        q.insert("a".to_string(), "x&y=z".to_string());
        let mut path = "/search".to_string();
        append_query(&mut path, &q);
        assert_eq!(path, "/search?z=a%20b&a=x%26y%3Dz");
    }
}
