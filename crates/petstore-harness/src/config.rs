//! Harness configuration and file loading.

use crate::HarnessError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Settings fixed for the lifetime of one [`crate::Harness`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Origin plus API prefix every request path is appended to.
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout_ms: Option<u64>,
    /// Log every request/response exchange from the dispatcher.
    pub log_exchanges: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            log_exchanges: true,
        }
    }
}

impl HarnessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn with_exchange_logging(mut self, enabled: bool) -> Self {
        self.log_exchanges = enabled;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from a file path.
    /// Supports both JSON (.json) and YAML (.yaml/.yml) formats based on file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::from_config_io_error(e, &path.display().to_string()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let config: HarnessConfig = match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| HarnessError::InvalidConfig {
                context: "JSON config parsing".to_string(),
                reason: e.to_string(),
            })?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| HarnessError::InvalidConfig {
                    context: "YAML config parsing".to_string(),
                    reason: e.to_string(),
                })?
            }
            _ => serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| HarnessError::InvalidConfig {
                    context: "config parsing (tried both JSON and YAML)".to_string(),
                    reason: e.to_string(),
                })?,
        };

        config.validate()
    }

    /// Check the base URL and normalize it (no trailing slash).
    pub fn validate(mut self) -> Result<Self, HarnessError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(HarnessError::InvalidConfig {
                context: "base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let url = reqwest::Url::parse(trimmed).map_err(|e| HarnessError::InvalidConfig {
            context: "base_url".to_string(),
            reason: format!("'{trimmed}' is not an absolute URL: {e}"),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(HarnessError::InvalidConfig {
                    context: "base_url".to_string(),
                    reason: format!("unsupported scheme '{other}', expected http or https"),
                });
            }
        }

        if self.timeout_ms == Some(0) {
            return Err(HarnessError::InvalidConfig {
                context: "timeout_ms".to_string(),
                reason: "must be greater than zero when set".to_string(),
            });
        }

        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Full URL for an already-resolved request path.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
