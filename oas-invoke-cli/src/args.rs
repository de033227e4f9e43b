use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct SpecsArgs {
    /// Directory searched recursively for OpenAPI documents.
    #[arg(long = "specs", env = "OAS_INVOKE_SPECS_DIR", default_value = "OpenApiSpecs")]
    pub dir: PathBuf,
    /// Also pick up `.yaml` / `.yml` documents.
    #[arg(long)]
    pub include_yaml: bool,
}

#[derive(Debug, Args, Clone)]
pub struct InvokerArgs {
    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 30000)]
    pub timeout: u64,
    #[arg(long, default_value_t = 4_194_304)]
    pub max_response_bytes: usize,
    /// Base for endpoints whose specification has no absolute server URL.
    #[arg(long)]
    pub base_url: Option<url::Url>,
    /// Percent-encode path parameter values instead of inserting them verbatim.
    #[arg(long)]
    pub escape_path_values: bool,
}
