//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (MCP_EVERYTHING_*)
//! 2. TOML config file (if MCP_EVERYTHING_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (MCP_EVERYTHING_*)
/// 2. TOML config file (if MCP_EVERYTHING_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of Everything's HTTP server.
    ///
    /// Set via MCP_EVERYTHING_BASE_URL environment variable. A bare
    /// `host:port` is accepted and treated as `http://host:port`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via MCP_EVERYTHING_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fixed delay before each request to Everything, in milliseconds.
    ///
    /// Set via MCP_EVERYTHING_REQUEST_DELAY_MS environment variable.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Scope used when a search call does not provide one.
    ///
    /// Set via MCP_EVERYTHING_DEFAULT_SCOPE environment variable.
    #[serde(default = "default_scope")]
    pub default_scope: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via MCP_EVERYTHING_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Username for Everything's HTTP server, when it requires a login.
    #[serde(default)]
    pub http_username: Option<String>,

    /// Password for Everything's HTTP server.
    #[serde(default)]
    pub http_password: Option<String>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8011".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_request_delay_ms() -> u64 {
    100
}

fn default_scope() -> String {
    "C:".into()
}

fn default_user_agent() -> String {
    "mcp-everything/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            request_delay_ms: default_request_delay_ms(),
            default_scope: default_scope(),
            user_agent: default_user_agent(),
            http_username: None,
            http_password: None,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Pre-request throttle delay as Duration.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Parse `base_url`, adding an `http://` scheme when none is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the value is not a usable HTTP(S) URL.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.trim();
        let with_scheme =
            if raw.contains("://") { raw.to_string() } else { format!("http://{}", raw) };

        let url = Url::parse(&with_scheme)
            .map_err(|e| ConfigError::Invalid { field: "base_url".into(), reason: e.to_string() })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Invalid {
                field: "base_url".into(),
                reason: format!("unsupported scheme: {}", url.scheme()),
            });
        }

        if url.host_str().is_none() {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "missing host".into() });
        }

        Ok(url)
    }

    /// HTTP Basic credentials, if a username is configured.
    pub fn credentials(&self) -> Option<(&str, Option<&str>)> {
        self.http_username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| (u, self.http_password.as_deref()))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `MCP_EVERYTHING_`
    /// 2. TOML file from `MCP_EVERYTHING_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("MCP_EVERYTHING_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("MCP_EVERYTHING_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
