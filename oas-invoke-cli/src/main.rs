#![forbid(unsafe_code)]

use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "oas-invoke", version, about = "Discover and invoke OpenAPI endpoints")]
struct Cli {
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    utils::init_tracing(&cli.log_level);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::List { specs, output } => cmd::list::list_cmd(specs, output),
        Command::Endpoints { path, output } => cmd::endpoints::endpoints_cmd(&path, output),
        Command::Validate { path, output } => cmd::validate::validate_cmd(&path, output),
        Command::Invoke {
            activity,
            endpoint,
            headers,
            query,
            path_params,
            body,
            specs,
            invoker,
            output,
        } => {
            cmd::invoke::invoke_cmd(
                &activity,
                &endpoint,
                &headers,
                &query,
                &path_params,
                body.as_deref(),
                specs,
                invoker,
                output,
            )
            .await
        }
    }
}
