use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ParseError;
use crate::parser::fields::{child_ptr, object_at, optional_bool, optional_str, required_str};
use crate::types::{
    ContentMap, Endpoint, HttpMethod, MediaType, Parameter, ParameterLocation, RequestBody,
    Response,
};

pub(crate) fn parse_endpoint(
    path: &str,
    method: HttpMethod,
    operation: &Value,
    shared_params: Option<&Value>,
    item_ptr: &str,
    op_ptr: &str,
) -> Result<Endpoint, ParseError> {
    let op = object_at(operation, op_ptr)?;

    let mut endpoint = Endpoint::new(path, method);
    endpoint.operation_id = optional_str(op, "operationId", op_ptr)?;
    endpoint.summary = optional_str(op, "summary", op_ptr)?;
    endpoint.description = optional_str(op, "description", op_ptr)?;

    // Path-item parameters first; an operation parameter with the same (name, in) replaces it in place.
    let mut params = parse_parameters(shared_params, &child_ptr(item_ptr, "parameters"))?;
    for p in parse_parameters(op.get("parameters"), &child_ptr(op_ptr, "parameters"))? {
        match params
            .iter()
            .position(|q| q.name == p.name && q.location == p.location)
        {
            Some(pos) => params[pos] = p,
            None => params.push(p),
        }
    }
    endpoint.parameters = params;

    if let Some(rb) = op.get("requestBody") {
        endpoint.request_body = Some(parse_request_body(rb, &child_ptr(op_ptr, "requestBody"))?);
    }

    if let Some(responses) = op.get("responses") {
        let responses_ptr = child_ptr(op_ptr, "responses");
        for (status, resp) in object_at(responses, &responses_ptr)? {
            let resp_ptr = child_ptr(&responses_ptr, status);
            endpoint
                .responses
                .insert(status.clone(), parse_response(resp, &resp_ptr)?);
        }
    }

    Ok(endpoint)
}

fn parse_parameters(value: Option<&Value>, ptr: &str) -> Result<Vec<Parameter>, ParseError> {
    let arr = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(v) => v
            .as_array()
            .ok_or_else(|| ParseError::invalid(ptr.to_string(), "an array"))?,
    };

    let mut out = Vec::with_capacity(arr.len());
    for (i, entry) in arr.iter().enumerate() {
        let entry_ptr = format!("{ptr}/{i}");
        let obj = object_at(entry, &entry_ptr)?;
        if let Some(r) = obj.get("$ref").and_then(|v| v.as_str()) {
            tracing::debug!(pointer = %entry_ptr, reference = r, "skipping $ref parameter");
            continue;
        }
        out.push(parse_parameter(obj, &entry_ptr)?);
    }
    Ok(out)
}

fn parse_parameter(
    obj: &serde_json::Map<String, Value>,
    ptr: &str,
) -> Result<Parameter, ParseError> {
    let name = required_str(obj, "name", ptr)?;
    let location = required_str(obj, "in", ptr)?;
    let location = ParameterLocation::parse(&location).ok_or_else(|| {
        ParseError::invalid(child_ptr(ptr, "in"), "one of query, path, header, cookie")
    })?;

    Ok(Parameter {
        name,
        location,
        description: optional_str(obj, "description", ptr)?,
        required: optional_bool(obj, "required", ptr)?,
        schema_type: obj.get("schema").and_then(schema_type),
    })
}

/// `schema.type`; for OpenAPI 3.1 type arrays the first non-`null` entry.
fn schema_type(schema: &Value) -> Option<String> {
    match schema.get("type")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(types) => types
            .iter()
            .filter_map(|t| t.as_str())
            .find(|t| *t != "null")
            .map(|t| t.to_string()),
        _ => None,
    }
}

fn parse_request_body(value: &Value, ptr: &str) -> Result<RequestBody, ParseError> {
    let obj = object_at(value, ptr)?;
    Ok(RequestBody {
        description: optional_str(obj, "description", ptr)?,
        required: optional_bool(obj, "required", ptr)?,
        content: parse_content(obj.get("content"), &child_ptr(ptr, "content"))?,
    })
}

fn parse_response(value: &Value, ptr: &str) -> Result<Response, ParseError> {
    let obj = object_at(value, ptr)?;
    Ok(Response {
        description: optional_str(obj, "description", ptr)?,
        content: parse_content(obj.get("content"), &child_ptr(ptr, "content"))?,
    })
}

fn parse_content(value: Option<&Value>, ptr: &str) -> Result<ContentMap, ParseError> {
    let Some(value) = value else {
        return Ok(IndexMap::new());
    };
    let mut content = IndexMap::new();
    for (media_type, entry) in object_at(value, ptr)? {
        let entry = object_at(entry, &child_ptr(ptr, media_type))?;
        content.insert(
            media_type.clone(),
            MediaType {
                schema: entry.get("schema").cloned(),
            },
        );
    }
    Ok(content)
}
