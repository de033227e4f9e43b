use std::time::Duration;

use crate::sanitize::SensitiveHeadersConfig;

#[derive(Debug, Clone)]
pub struct InvokerConfig {
    pub timeout: Duration,
    pub max_response_bytes: usize,
    /// Base for requests whose URL is still relative after building.
    pub default_base_url: Option<url::Url>,
    pub user_agent: String,
    pub sensitive_headers: SensitiveHeadersConfig,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_response_bytes: 4 * 1024 * 1024,
            default_base_url: None,
            user_agent: concat!("oas-invoke/", env!("CARGO_PKG_VERSION")).to_string(),
            sensitive_headers: SensitiveHeadersConfig::default(),
        }
    }
}
