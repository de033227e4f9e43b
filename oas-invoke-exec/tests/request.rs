use oas_invoke_core::{Endpoint, HttpMethod};
use oas_invoke_exec::{build_request, BuildOptions, ParamMap};
use pretty_assertions::assert_eq;
use serde_json::json;

const BASE: &str = "https://petstore.example.com/v1";

fn params(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn get_with_path_parameter_substitutes_the_value() {
    let mut endpoint = Endpoint::new("/pets/{id}", HttpMethod::Get);
    endpoint.operation_id = Some("getPet".into());

    let req = build_request(
        &endpoint,
        Some(BASE),
        &ParamMap::new(),
        &ParamMap::new(),
        &params(&[("id", "42")]),
        None,
        &BuildOptions::default(),
    );

    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, "https://petstore.example.com/v1/pets/42");
    assert!(req.headers.is_empty());
    assert_eq!(req.body, None);
}

#[test]
fn post_with_body_serializes_json_and_sets_content_type() {
    let endpoint = Endpoint::new("/pets", HttpMethod::Post);
    let body = json!({"name": "Rex"});

    let req = build_request(
        &endpoint,
        Some(BASE),
        &ParamMap::new(),
        &ParamMap::new(),
        &ParamMap::new(),
        Some(&body),
        &BuildOptions::default(),
    );

    assert_eq!(req.url, "https://petstore.example.com/v1/pets");
    assert_eq!(req.body.as_deref(), Some(r#"{"name":"Rex"}"#));
    assert_eq!(
        req.headers,
        vec![("Content-Type".to_string(), "application/json".to_string())]
    );
}

#[test]
fn query_parameters_are_encoded_in_insertion_order() {
    let endpoint = Endpoint::new("/pets", HttpMethod::Get);
    let req = build_request(
        &endpoint,
        Some(BASE),
        &ParamMap::new(),
        &params(&[("tag", "big dogs&cats"), ("limit", "10")]),
        &ParamMap::new(),
        None,
        &BuildOptions::default(),
    );

    assert_eq!(
        req.url,
        "https://petstore.example.com/v1/pets?tag=big%20dogs%26cats&limit=10"
    );
}

#[test]
fn query_keys_are_encoded_too() {
    let endpoint = Endpoint::new("/search", HttpMethod::Get);
    let req = build_request(
        &endpoint,
        Some(BASE),
        &ParamMap::new(),
        &params(&[("a&b=c d", "1")]),
        &ParamMap::new(),
        None,
        &BuildOptions::default(),
    );

    assert_eq!(
        req.url,
        "https://petstore.example.com/v1/search?a%26b%3Dc%20d=1"
    );
}

#[test]
fn body_is_dropped_for_methods_without_a_body() {
    let body = json!({"ignored": true});
    for method in [HttpMethod::Get, HttpMethod::Delete, HttpMethod::Head, HttpMethod::Options] {
        let endpoint = Endpoint::new("/pets", method);
        let req = build_request(
            &endpoint,
            Some(BASE),
            &params(&[("content-type", "text/plain")]),
            &ParamMap::new(),
            &ParamMap::new(),
            Some(&body),
            &BuildOptions::default(),
        );
        assert_eq!(req.body, None, "{method}");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "text/plain".to_string())]
        );
    }
}

#[test]
fn caller_content_type_is_replaced_when_a_body_is_attached() {
    let endpoint = Endpoint::new("/pets/{id}", HttpMethod::Patch);
    let req = build_request(
        &endpoint,
        Some(BASE),
        &params(&[("Content-Type", "text/plain"), ("X-Trace", "abc")]),
        &ParamMap::new(),
        &params(&[("id", "7")]),
        Some(&json!([1, 2])),
        &BuildOptions::default(),
    );

    assert_eq!(
        req.headers,
        vec![
            ("X-Trace".to_string(), "abc".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]
    );
    assert_eq!(req.body.as_deref(), Some("[1,2]"));
}

#[test]
fn unsupplied_placeholders_stay_verbatim() {
    let endpoint = Endpoint::new("/owners/{owner}/pets/{id}", HttpMethod::Get);
    let req = build_request(
        &endpoint,
        Some(BASE),
        &ParamMap::new(),
        &ParamMap::new(),
        &params(&[("owner", "ann"), ("unused", "x")]),
        None,
        &BuildOptions::default(),
    );

    assert_eq!(req.url, "https://petstore.example.com/v1/owners/ann/pets/{id}");
}

#[test]
fn path_values_are_verbatim_unless_escaping_is_enabled() {
    let endpoint = Endpoint::new("/files/{name}", HttpMethod::Get);
    let path = params(&[("name", "a/b c")]);

    let verbatim = build_request(
        &endpoint,
        None,
        &ParamMap::new(),
        &ParamMap::new(),
        &path,
        None,
        &BuildOptions::default(),
    );
    assert_eq!(verbatim.url, "/files/a/b c");

    let escaped = build_request(
        &endpoint,
        None,
        &ParamMap::new(),
        &ParamMap::new(),
        &path,
        None,
        &BuildOptions {
            escape_path_values: true,
        },
    );
    assert_eq!(escaped.url, "/files/a%2Fb%20c");
}

#[test]
fn building_is_deterministic_and_leaves_the_endpoint_untouched() {
    let endpoint = Endpoint::new("/pets/{id}", HttpMethod::Put);
    let before = endpoint.clone();
    let headers = params(&[("Authorization", "Bearer t")]);
    let query = params(&[("dry_run", "true")]);
    let path = params(&[("id", "1")]);
    let body = json!({"name": "Rex", "tags": ["a"]});

    let build = || {
        build_request(
            &endpoint,
            Some("https://petstore.example.com/v1/"),
            &headers,
            &query,
            &path,
            Some(&body),
            &BuildOptions::default(),
        )
    };

    let first = build();
    assert_eq!(first, build());
    assert_eq!(endpoint, before);
    assert_eq!(first.url, "https://petstore.example.com/v1/pets/1?dry_run=true");
}
