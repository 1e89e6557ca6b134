//! Statement execution for sqlrelay.
//!
//! Provides the executor trait and implementations for submitting a single
//! SQL statement to the remote RPC endpoint. Every attempt produces an
//! [`ExecOutcome`] — failures are values, not errors, so the run loop's
//! continue-on-error contract stays explicit and testable.

pub mod http;
pub mod mock;

pub use http::{HttpExecutor, HttpExecutorConfig};
pub use mock::MockExecutor;

use async_trait::async_trait;

/// Outcome of submitting one statement to the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The endpoint accepted the statement (HTTP 200 or 204).
    Success {
        /// Response status code.
        status: u16,
    },
    /// The endpoint returned any other status (404 when the RPC function is
    /// not configured, 500 on execution errors, etc.)
    Failure {
        /// Response status code.
        status: u16,
        /// Response body, truncated for diagnostics.
        body: String,
    },
    /// The request never produced a response (connection refused, timeout,
    /// DNS failure, ...).
    Exception {
        /// Textual description of the transport error.
        message: String,
    },
}

impl ExecOutcome {
    /// Returns true for [`ExecOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Trait for executors that submit one SQL statement to a remote endpoint.
///
/// Implementations must be thread-safe (Send + Sync). The call is not
/// idempotent and is never retried: whatever the remote side did before
/// failing stays done.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Submits a single statement and classifies the result.
    ///
    /// Never returns an error — transport problems are reported as
    /// [`ExecOutcome::Exception`].
    async fn execute(&self, sql: &str) -> ExecOutcome;
}
