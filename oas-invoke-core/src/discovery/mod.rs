use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DocumentError;
use crate::parser::parse_file;
use crate::types::Specification;

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// File extensions (without the dot, matched case-insensitively) treated as documents.
    pub extensions: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["json".to_string()],
        }
    }
}

impl DiscoveryOptions {
    pub fn with_yaml(mut self) -> Self {
        for ext in ["yaml", "yml"] {
            if !self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                self.extensions.push(ext.to_string());
            }
        }
        self
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug)]
pub struct DiscoveryFailure {
    pub path: PathBuf,
    pub error: DocumentError,
}

#[derive(Debug, Default)]
pub struct DiscoveryReport {
    pub specifications: Vec<Specification>,
    pub failures: Vec<DiscoveryFailure>,
}

/// Parses every `*.json` document under `root`. Bad documents are logged and skipped.
pub fn discover(root: &Path) -> Vec<Specification> {
    discover_with(root, &DiscoveryOptions::default()).specifications
}

pub fn discover_with(root: &Path, options: &DiscoveryOptions) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    if !root.is_dir() {
        tracing::warn!(directory = %root.display(), "OpenAPI specifications directory not found");
        return report;
    }

    let files = collect_files(root, options, &mut report.failures);

    for file in files {
        match parse_file(&file) {
            Ok(spec) => {
                tracing::info!(title = %spec.title, path = %file.display(), "parsed OpenAPI specification");
                report.specifications.push(spec);
            }
            Err(error) => {
                tracing::error!(path = %file.display(), %error, "failed to parse OpenAPI specification");
                report.failures.push(DiscoveryFailure { path: file, error });
            }
        }
    }

    tracing::info!(
        parsed = report.specifications.len(),
        failed = report.failures.len(),
        directory = %root.display(),
        "OpenAPI discovery complete"
    );
    report
}

/// Depth-first walk with entries sorted by file name, so the order is stable across runs.
/// Symlinks are not followed. Unreadable entries are recorded as failures.
fn collect_files(
    root: &Path,
    options: &DiscoveryOptions,
    failures: &mut Vec<DiscoveryFailure>,
) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && options.matches(entry.path()) {
                    out.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                let message = err.to_string();
                tracing::error!(path = %path.display(), error = %message, "failed to read directory entry");
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(message));
                failures.push(DiscoveryFailure {
                    path: path.clone(),
                    error: DocumentError::Read { path, source },
                });
            }
        }
    }
    out
}
