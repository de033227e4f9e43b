use std::path::Path;

use oas_invoke_core::parse_file;
use serde::Serialize;

use crate::cmd::validate::document_error_code;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EndpointRow {
    identifier: String,
    method: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

pub fn endpoints_cmd(path: &Path, output: OutputArgs) -> i32 {
    let spec = match parse_file(path) {
        Ok(s) => s,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return document_error_code(&e);
        }
    };

    let rows: Vec<EndpointRow> = spec
        .endpoints()
        .iter()
        .map(|e| EndpointRow {
            identifier: e.identifier(),
            method: e.method.as_str().to_string(),
            path: e.path.clone(),
            summary: e.summary.clone(),
        })
        .collect();

    if output.format == OutputFormat::Text && !output.quiet {
        for r in &rows {
            match &r.summary {
                Some(s) => println!("{:<7} {}  [{}]  {s}", r.method, r.path, r.identifier),
                None => println!("{:<7} {}  [{}]", r.method, r.path, r.identifier),
            }
        }
    } else {
        print_result(output.format, output.quiet, &rows);
    }
    exit_codes::SUCCESS
}
