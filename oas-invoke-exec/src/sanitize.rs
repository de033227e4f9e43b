#[derive(Debug, Clone)]
pub struct SensitiveHeadersConfig {
    /// Lowercased header names whose values are never logged.
    pub always_redact: Vec<String>,
}

impl Default for SensitiveHeadersConfig {
    fn default() -> Self {
        Self {
            always_redact: [
                "authorization",
                "proxy-authorization",
                "cookie",
                "set-cookie",
                "x-api-key",
            ]
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

pub const REDACTED: &str = "<redacted>";

/// Copy of `headers` fit for logging. The request that is actually sent is untouched.
pub fn sanitize_headers(
    headers: &[(String, String)],
    sensitive: &SensitiveHeadersConfig,
) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(k, v)| {
            let hidden = sensitive
                .always_redact
                .iter()
                .any(|s| s.eq_ignore_ascii_case(k));
            if hidden {
                (k.clone(), REDACTED.to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}
