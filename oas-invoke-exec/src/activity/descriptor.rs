use oas_invoke_core::{Endpoint, Specification};

pub const CATEGORY: &str = "OpenAPI";
pub const OUTCOME_DONE: &str = "Done";
pub const OUTCOME_ERROR: &str = "Error";
const SETTINGS: &str = "Settings";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDescriptor {
    /// `OpenApi_<normalized title>`; not guaranteed unique across specifications.
    pub identifier: String,
    pub type_name: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
    pub outcomes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub name: String,
    pub type_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub name: String,
    pub type_name: String,
    pub display_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Whitespace and hyphens become `_`, one for one.
pub fn normalize_name(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .collect()
}

pub fn describe(spec: &Specification) -> ActivityDescriptor {
    let identifier = format!("OpenApi_{}", normalize_name(&spec.title));
    ActivityDescriptor {
        type_name: format!("OpenApi.{identifier}"),
        identifier,
        display_name: format!("OpenAPI: {}", spec.title),
        description: format!("Execute endpoints from {} API (v{})", spec.title, spec.version),
        category: CATEGORY.to_string(),
        inputs: input_descriptors(spec),
        outputs: output_descriptors(),
        outcomes: vec![OUTCOME_DONE.to_string(), OUTCOME_ERROR.to_string()],
    }
}

fn endpoint_option(e: &Endpoint) -> SelectOption {
    let label = match &e.summary {
        Some(summary) => format!("{} {} - {summary}", e.method, e.path),
        None => format!("{} {}", e.method, e.path),
    };
    SelectOption {
        value: e.identifier(),
        label,
    }
}

fn input(name: &str, type_name: &str, display_name: &str, description: &str) -> InputDescriptor {
    InputDescriptor {
        name: name.to_string(),
        type_name: type_name.to_string(),
        display_name: display_name.to_string(),
        description: Some(description.to_string()),
        category: Some(SETTINGS.to_string()),
        is_required: false,
        options: None,
    }
}

fn input_descriptors(spec: &Specification) -> Vec<InputDescriptor> {
    let mut endpoint = input("Endpoint", "string", "Endpoint", "Select the API endpoint to call");
    endpoint.is_required = true;
    endpoint.options = Some(spec.endpoints.iter().map(endpoint_option).collect());

    vec![
        endpoint,
        input(
            "Headers",
            "map<string,string>",
            "Headers",
            "Additional headers to include in the request",
        ),
        input(
            "QueryParameters",
            "map<string,string>",
            "Query Parameters",
            "Query parameters for the request",
        ),
        input(
            "RequestBody",
            "json",
            "Request Body",
            "Request body (for POST/PUT/PATCH requests)",
        ),
        input(
            "PathParameters",
            "map<string,string>",
            "Path Parameters",
            "Path parameters for the endpoint",
        ),
    ]
}

fn output_descriptors() -> Vec<OutputDescriptor> {
    [
        ("Response", "json", "Response", "The response from the API call"),
        ("StatusCode", "int", "Status Code", "HTTP status code of the response"),
        ("ResponseHeaders", "map<string,string[]>", "Response Headers", "Response headers"),
    ]
    .into_iter()
    .map(|(name, type_name, display_name, description)| OutputDescriptor {
        name: name.to_string(),
        type_name: type_name.to_string(),
        display_name: display_name.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}
