use std::path::Path;

use oas_invoke_core::{parse_file, DocumentError};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    title: String,
    version: String,
    endpoints: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// Unreadable files are a runtime error; unparseable ones a validation failure.
pub fn document_error_code(e: &DocumentError) -> i32 {
    match e {
        DocumentError::Read { .. } => exit_codes::RUNTIME_ERROR,
        DocumentError::Parse { .. } => exit_codes::VALIDATION_FAILED,
    }
}

pub fn validate_cmd(path: &Path, output: OutputArgs) -> i32 {
    let spec = match parse_file(path) {
        Ok(s) => s,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return document_error_code(&e);
        }
    };

    let warnings: Vec<String> = spec.lint().iter().map(|i| i.to_string()).collect();

    if output.format == OutputFormat::Text && !output.quiet {
        println!(
            "ok: valid OpenAPI document '{}' v{} ({} endpoints)",
            spec.title,
            spec.version,
            spec.endpoints.len()
        );
        for w in &warnings {
            eprintln!("warning: {w}");
        }
    } else {
        print_result(
            output.format,
            output.quiet,
            &ValidateResult {
                valid: true,
                title: spec.title.clone(),
                version: spec.version.clone(),
                endpoints: spec.endpoints.len(),
                warnings,
            },
        );
    }
    exit_codes::SUCCESS
}
