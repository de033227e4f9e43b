use oas_invoke_core::{parse_document_str, resolve, DocumentFormat, HttpMethod};

const DOC: &str = r#"
{
  "info": { "title": "Pets", "version": "1" },
  "paths": {
    "/pets": {
      "get": { "operationId": "listPets" },
      "post": {}
    },
    "/pets/{id}": {
      "get": { "operationId": "getPet" },
      "put": { "operationId": "getPet" },
      "delete": { "operationId": "POST_/pets" }
    }
  }
}
"#;

#[test]
fn resolves_by_operation_id() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    let ep = resolve(&spec, "listPets").unwrap();
    assert_eq!(ep.path, "/pets");
    assert_eq!(ep.method, HttpMethod::Get);
}

#[test]
fn falls_back_to_method_path_key() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    let ep = resolve(&spec, "GET_/pets/{id}").unwrap();
    assert_eq!(ep.operation_id.as_deref(), Some("getPet"));
}

#[test]
fn key_match_is_case_sensitive() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    assert!(resolve(&spec, "get_/pets").is_none());
    assert!(resolve(&spec, "GET_/pets").is_some());
}

#[test]
fn duplicate_operation_ids_resolve_to_first_declared() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    let ep = resolve(&spec, "getPet").unwrap();
    assert_eq!(ep.method, HttpMethod::Get);
    assert!(std::ptr::eq(ep, resolve(&spec, "getPet").unwrap()));
}

#[test]
fn operation_id_match_takes_priority_over_key() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    let ep = resolve(&spec, "POST_/pets").unwrap();
    assert_eq!(ep.method, HttpMethod::Delete);
}

#[test]
fn unknown_identifier_is_not_found() {
    let spec = parse_document_str(DOC, DocumentFormat::Json).unwrap();
    assert!(resolve(&spec, "deletePet").is_none());
    assert!(spec.endpoint("").is_none());
}
