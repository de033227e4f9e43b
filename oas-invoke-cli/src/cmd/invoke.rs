use std::sync::Arc;
use std::time::Duration;

use oas_invoke_exec::activity::normalize_name;
use oas_invoke_exec::{
    ActivityInput, ActivityProvider, BuildOptions, CancellationToken, Invoker, InvokerConfig,
};

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::utils::{discovery_options, parse_pairs, read_body};
use crate::{InvokerArgs, OutputArgs, SpecsArgs};

#[allow(clippy::too_many_arguments)]
pub async fn invoke_cmd(
    activity: &str,
    endpoint: &str,
    headers: &[String],
    query: &[String],
    path_params: &[String],
    body: Option<&str>,
    specs: SpecsArgs,
    invoker: InvokerArgs,
    output: OutputArgs,
) -> i32 {
    let input = match build_input(endpoint, headers, query, path_params, body) {
        Ok(i) => i,
        Err(msg) => {
            print_error(output.format, output.quiet, &msg);
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let provider = ActivityProvider::load(&specs.dir, discovery_options(&specs));
    let catalog = provider.snapshot();
    let Some(entry) = catalog
        .get(activity)
        .or_else(|| catalog.get(&format!("OpenApi_{}", normalize_name(activity))))
    else {
        print_error(
            output.format,
            output.quiet,
            &format!("activity '{activity}' not found in {}", specs.dir.display()),
        );
        return exit_codes::RUNTIME_ERROR;
    };

    let config = InvokerConfig {
        timeout: Duration::from_millis(invoker.timeout),
        max_response_bytes: invoker.max_response_bytes,
        default_base_url: invoker.base_url.clone(),
        ..InvokerConfig::default()
    };
    let client = match Invoker::with_reqwest(config) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let bound = entry.activity(
        client,
        BuildOptions {
            escape_path_values: invoker.escape_path_values,
        },
    );

    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received, cancelling request");
                cancel.cancel();
            }
        })
    };

    let result = bound.execute(&input, &cancel).await;
    watcher.abort();

    print_result(output.format, output.quiet, &result.to_record());
    if result.is_done() {
        exit_codes::SUCCESS
    } else {
        exit_codes::INVOCATION_FAILED
    }
}

fn build_input(
    endpoint: &str,
    headers: &[String],
    query: &[String],
    path_params: &[String],
    body: Option<&str>,
) -> Result<ActivityInput, String> {
    let non_empty = |m: oas_invoke_exec::ParamMap| (!m.is_empty()).then_some(m);
    Ok(ActivityInput {
        endpoint: Some(endpoint.to_string()),
        headers: non_empty(parse_pairs("header", headers)?),
        query_parameters: non_empty(parse_pairs("query", query)?),
        path_parameters: non_empty(parse_pairs("path", path_params)?),
        body: body.map(read_body).transpose()?,
    })
}
