//! Mock executor for testing.
//!
//! Returns scripted outcomes in order and records every statement it was
//! asked to execute, so tests can assert the run loop's ordering and
//! continue-on-error behavior without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::exec::{ExecOutcome, SqlExecutor};

/// Mock executor that replays a scripted sequence of outcomes.
///
/// Once the script is exhausted, every further statement succeeds with
/// status 200.
#[derive(Debug, Default)]
pub struct MockExecutor {
    scripted: Mutex<VecDeque<ExecOutcome>>,
    executed: Mutex<Vec<String>>,
}

impl MockExecutor {
    /// Creates a mock executor that succeeds on every statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock executor that replays the given outcomes in order.
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = ExecOutcome>) -> Self {
        Self {
            scripted: Mutex::new(outcomes.into_iter().collect()),
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Returns the statements executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|executed| executed.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SqlExecutor for MockExecutor {
    async fn execute(&self, sql: &str) -> ExecOutcome {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(sql.to_string());
        }

        self.scripted
            .lock()
            .ok()
            .and_then(|mut scripted| scripted.pop_front())
            .unwrap_or(ExecOutcome::Success { status: 200 })
    }
}
