use std::path::PathBuf;

use oas_invoke_exec::ActivityProvider;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::utils::discovery_options;
use crate::{OutputArgs, SpecsArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedActivity {
    identifier: String,
    display_name: String,
    description: String,
    endpoints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
}

#[derive(Serialize)]
struct ListFailure {
    path: PathBuf,
    error: String,
}

#[derive(Serialize)]
struct ListResult {
    directory: PathBuf,
    activities: Vec<ListedActivity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<ListFailure>,
}

pub fn list_cmd(specs: SpecsArgs, output: OutputArgs) -> i32 {
    let provider = ActivityProvider::load(&specs.dir, discovery_options(&specs));
    let catalog = provider.snapshot();

    let activities = catalog
        .entries()
        .iter()
        .map(|entry| {
            let spec = entry.specification();
            ListedActivity {
                identifier: entry.descriptor().identifier.clone(),
                display_name: entry.descriptor().display_name.clone(),
                description: entry.descriptor().description.clone(),
                endpoints: spec.endpoints().iter().map(|e| e.identifier()).collect(),
                source: spec.source.clone(),
            }
        })
        .collect::<Vec<_>>();

    let failures = catalog
        .failures()
        .iter()
        .map(|f| ListFailure {
            path: f.path.clone(),
            error: f.message.clone(),
        })
        .collect::<Vec<_>>();

    if output.format == OutputFormat::Text && !output.quiet {
        if activities.is_empty() {
            println!("no OpenAPI activities found in {}", specs.dir.display());
        }
        for a in &activities {
            println!("{}  {} ({} endpoints)", a.identifier, a.description, a.endpoints.len());
        }
        for f in &failures {
            eprintln!("skipped {}: {}", f.path.display(), f.error);
        }
    } else {
        print_result(
            output.format,
            output.quiet,
            &ListResult {
                directory: specs.dir.clone(),
                activities,
                failures,
            },
        );
    }
    exit_codes::SUCCESS
}
