//! Runtime configuration.
//!
//! Settings come from `MARKETX_*` environment variables; the builder methods
//! exist so tests and embedders can construct a config directly.

use crate::error::ConfigError;
use crate::sse::DEFAULT_MAX_PENDING_BYTES;

pub const ENV_API_URL: &str = "MARKETX_API_URL";
pub const ENV_API_KEY: &str = "MARKETX_API_KEY";
pub const ENV_ANALYZE_PATH: &str = "MARKETX_ANALYZE_PATH";
pub const ENV_QUOTE_PATH: &str = "MARKETX_QUOTE_PATH";
pub const ENV_MAX_PENDING_BYTES: &str = "MARKETX_MAX_PENDING_BYTES";
pub const ENV_LOG: &str = "MARKETX_LOG";

pub const DEFAULT_ANALYZE_PATH: &str = "/functions/v1/analyze-stock";
pub const DEFAULT_QUOTE_PATH: &str = "/functions/v1/fetch-stock";
pub const DEFAULT_LOG_FILTER: &str = "marketx=warn";

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use marketx::config::AppConfig;
///
/// let config = AppConfig::new("https://xyz.supabase.co", "anon-key")
///     .with_max_pending_bytes(None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the function host, without trailing slash
    pub api_url: String,
    /// Static bearer credential
    pub api_key: String,
    /// Path of the streaming analysis endpoint
    pub analyze_path: String,
    /// Path of the quote endpoint
    pub quote_path: String,
    /// Decode buffer cap (`None` disables it)
    pub max_pending_bytes: Option<usize>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl AppConfig {
    /// Create a config with default paths and limits.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
            quote_path: DEFAULT_QUOTE_PATH.to_string(),
            max_pending_bytes: Some(DEFAULT_MAX_PENDING_BYTES),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Set the analysis endpoint path.
    pub fn with_analyze_path(mut self, path: impl Into<String>) -> Self {
        self.analyze_path = path.into();
        self
    }

    /// Set the quote endpoint path.
    pub fn with_quote_path(mut self, path: impl Into<String>) -> Self {
        self.quote_path = path.into();
        self
    }

    /// Set the decode buffer cap.
    pub fn with_max_pending_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_pending_bytes = limit;
        self
    }

    /// Set the default log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Full URL of the analysis endpoint.
    pub fn analyze_url(&self) -> String {
        join_url(&self.api_url, &self.analyze_path)
    }

    /// Full URL of the quote endpoint.
    pub fn quote_url(&self) -> String {
        join_url(&self.api_url, &self.quote_path)
    }

    /// Load the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get(ENV_API_URL).ok_or(ConfigError::Missing { var: ENV_API_URL })?;
        let api_key = get(ENV_API_KEY).ok_or(ConfigError::Missing { var: ENV_API_KEY })?;

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: ENV_API_URL,
                value: api_url,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let mut config = Self::new(api_url, api_key.trim());

        if let Some(path) = get(ENV_ANALYZE_PATH) {
            config = config.with_analyze_path(path);
        }
        if let Some(path) = get(ENV_QUOTE_PATH) {
            config = config.with_quote_path(path);
        }
        if let Some(raw) = get(ENV_MAX_PENDING_BYTES) {
            let limit: usize = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: ENV_MAX_PENDING_BYTES,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            // 0 disables the cap
            config = config.with_max_pending_bytes((limit > 0).then_some(limit));
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }

        Ok(config)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
