//! Configuration management for sqlrelay.
//!
//! The target URL and service key are threaded as explicit parameters, never
//! embedded as literals. Precedence: CLI arguments (which clap also fills
//! from `SUPABASE_URL` / `SUPABASE_SERVICE_ROLE_KEY`) over the TOML config
//! file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{RelayError, Result};
use crate::exec::http::DEFAULT_TIMEOUT_SECS;

/// Configuration file contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target base URL (e.g. "https://myproject.supabase.co").
    pub url: Option<String>,

    /// Service role key (not recommended to store in config).
    pub key: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sqlrelay")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; it yields the empty default.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| RelayError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            RelayError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}

/// Fully resolved target: where to send statements and with what credential.
#[derive(Debug, Clone)]
pub struct Target {
    /// Target base URL.
    pub base_url: String,
    /// Service role key.
    pub service_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Target {
    /// Resolves the target from CLI-provided values and the config file.
    ///
    /// CLI values win; the config file fills the gaps. Missing URL or key
    /// after resolution is a fatal configuration error, raised before any
    /// network activity.
    pub fn resolve(
        cli_url: Option<String>,
        cli_key: Option<String>,
        cli_timeout: Option<u64>,
        config: &Config,
    ) -> Result<Self> {
        let base_url = cli_url
            .or_else(|| config.url.clone())
            .ok_or_else(|| {
                RelayError::config(
                    "No target URL configured. Pass --url, set SUPABASE_URL, or add 'url' to the config file",
                )
            })?;
        validate_base_url(&base_url)?;

        let service_key = cli_key
            .or_else(|| config.key.clone())
            .ok_or_else(|| {
                RelayError::config(
                    "No service key configured. Pass --key, set SUPABASE_SERVICE_ROLE_KEY, or add 'key' to the config file",
                )
            })?;

        let timeout_secs = cli_timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            service_key,
            timeout_secs,
        })
    }

    /// Returns a display-safe string (no credential) for log output.
    pub fn display_string(&self) -> String {
        format!("{} (timeout: {}s)", self.base_url, self.timeout_secs)
    }
}

/// Validates that the base URL parses and uses an http(s) scheme.
fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)
        .map_err(|e| RelayError::config(format!("Invalid target URL '{base_url}': {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(RelayError::config(format!(
            "Invalid scheme '{}' in target URL. Expected 'http' or 'https'",
            url.scheme()
        )));
    }

    Ok(())
}
