//! HTTP executor for the remote RPC endpoint.
//!
//! Submits statements as `POST {base_url}/rest/v1/rpc/exec_sql` with the
//! service key in both the Authorization and apikey headers (Supabase-style
//! endpoints require both).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::{RelayError, Result};
use crate::exec::{ExecOutcome, SqlExecutor};

/// Default timeout for RPC requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path of the SQL execution RPC, relative to the base URL.
pub const RPC_PATH: &str = "/rest/v1/rpc/exec_sql";

/// Maximum number of response body characters captured on failure.
const BODY_CAPTURE_LEN: usize = 200;

/// HTTP executor configuration.
#[derive(Debug, Clone)]
pub struct HttpExecutorConfig {
    /// Target base URL (e.g. "https://myproject.supabase.co").
    pub base_url: String,
    /// Service role key, sent as bearer token and apikey header.
    pub service_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpExecutorConfig {
    /// Creates a new config with the given base URL and service key.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            service_key: service_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Executor that submits statements over HTTP.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    config: HttpExecutorConfig,
    client: Client,
}

impl HttpExecutor {
    /// Creates a new HTTP executor with the given configuration.
    pub fn new(config: HttpExecutorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RelayError::http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Returns the full RPC endpoint URL.
    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), RPC_PATH)
    }
}

/// Request body for the exec_sql RPC.
#[derive(Debug, Serialize)]
struct ExecRequest<'a> {
    sql: &'a str,
}

/// Classifies a received response by status code.
///
/// 200 and 204 are success; everything else is a failure with the body
/// captured (truncated) for diagnostics. A 404 means the RPC function is not
/// configured on the target — still a failure, never an exception.
fn classify(status: u16, body: &str) -> ExecOutcome {
    match status {
        200 | 204 => ExecOutcome::Success { status },
        _ => ExecOutcome::Failure {
            status,
            body: truncate_chars(body, BODY_CAPTURE_LEN),
        },
    }
}

/// Truncates a string to at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        s.chars().take(max).collect()
    } else {
        s.to_string()
    }
}

/// Describes a reqwest transport error for the Exception outcome.
fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("failed to connect: {}", e)
    } else {
        format!("request failed: {}", e)
    }
}

#[async_trait]
impl SqlExecutor for HttpExecutor {
    async fn execute(&self, sql: &str) -> ExecOutcome {
        let request = ExecRequest { sql };

        let response = match self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.service_key))
            .header("apikey", &self.config.service_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return ExecOutcome::Exception {
                    message: describe_transport_error(&e),
                }
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return ExecOutcome::Exception {
                    message: describe_transport_error(&e),
                }
            }
        };

        classify(status, &body)
    }
}
