use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the activities discovered in the specifications directory.
    List {
        #[command(flatten)]
        specs: SpecsArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the endpoints of one document.
    Endpoints {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Parse one document and report path template problems.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Call one endpoint of a discovered activity.
    Invoke {
        /// Activity identifier (`OpenApi_<title>`) or the specification title.
        activity: String,
        /// `operationId` or `METHOD_path` key.
        endpoint: String,
        #[arg(long = "header", value_name = "KEY=VALUE")]
        headers: Vec<String>,
        #[arg(long = "query", value_name = "KEY=VALUE")]
        query: Vec<String>,
        #[arg(long = "path", value_name = "KEY=VALUE")]
        path_params: Vec<String>,
        /// JSON body, or `@FILE` to read it from a file.
        #[arg(long)]
        body: Option<String>,
        #[command(flatten)]
        specs: SpecsArgs,
        #[command(flatten)]
        invoker: InvokerArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}
