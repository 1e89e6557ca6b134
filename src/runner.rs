//! The migration run loop.
//!
//! Loads statements from a SQL file and submits them one at a time, in file
//! order, through a [`SqlExecutor`]. Best-effort batch: a failed statement
//! never stops the loop, nothing is retried, and the process does not exit
//! non-zero when statements fail. Progress and the final summary are printed
//! to stdout; diagnostics go through tracing.

use std::path::Path;

use tracing::{info, warn};

use crate::check::FragmentChecker;
use crate::error::{RelayError, Result};
use crate::exec::{ExecOutcome, SqlExecutor};
use crate::statements::{load_statements, preview, MIN_STATEMENT_LEN};

/// Web console an operator can fall back to when the RPC endpoint is not
/// available on the target.
pub const MANUAL_CONSOLE_URL: &str = "https://app.supabase.com/sql/project";

/// Outcome of one attempted statement, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementReport {
    /// 1-based position among the loaded statements. Skipped short
    /// statements consume an index without producing a report.
    pub index: usize,
    /// Preview line as printed (80-character rule).
    pub preview: String,
    /// Classified execution outcome.
    pub outcome: ExecOutcome,
}

/// Aggregate result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Statements classified as Success.
    pub success_count: usize,
    /// Statements classified as Failure or Exception.
    pub error_count: usize,
    /// Ordered per-statement reports.
    pub reports: Vec<StatementReport>,
}

impl RunSummary {
    /// Total number of statements actually submitted.
    pub fn attempted(&self) -> usize {
        self.reports.len()
    }
}

/// Sequential migration runner over a [`SqlExecutor`].
#[derive(Debug)]
pub struct Runner<E: SqlExecutor> {
    executor: E,
    checker: Option<FragmentChecker>,
}

impl<E: SqlExecutor> Runner<E> {
    /// Creates a runner with the fragment lint disabled.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            checker: None,
        }
    }

    /// Enables the sqlparser fragment lint (warn-only, never gates).
    pub fn with_fragment_check(mut self) -> Self {
        self.checker = Some(FragmentChecker::new());
        self
    }

    /// Returns a reference to the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Reads the SQL file and runs every statement in it, then prints the
    /// summary and the manual-fallback hint.
    ///
    /// Only the file read can fail; per-statement problems are recorded in
    /// the returned [`RunSummary`].
    pub async fn run_file(&self, path: &Path) -> Result<RunSummary> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| RelayError::load(format!("{}: {}", path.display(), e)))?;

        let summary = self.run_sql(&text).await;
        self.print_summary(&summary, path);
        Ok(summary)
    }

    /// Runs every statement in the given SQL text.
    ///
    /// One request is in flight at a time; the loop continues past failures
    /// and exceptions. Statements shorter than [`MIN_STATEMENT_LEN`] are
    /// skipped (they are almost certainly comment residue).
    pub async fn run_sql(&self, text: &str) -> RunSummary {
        let statements = load_statements(text);
        println!("Found {} SQL statements to execute.", statements.len());

        let mut summary = RunSummary::default();

        for (idx, stmt) in statements.iter().enumerate() {
            let index = idx + 1;

            if stmt.chars().count() < MIN_STATEMENT_LEN {
                info!(index, "skipping short statement");
                continue;
            }

            if let Some(checker) = &self.checker {
                if let Some(warning) = checker.check(stmt) {
                    warn!(index, "{}", warning);
                }
            }

            let stmt_preview = preview(stmt);
            println!("\n[{}] Executing: {}", index, stmt_preview);

            let outcome = self.executor.execute(stmt).await;
            match &outcome {
                ExecOutcome::Success { status } => {
                    println!("    ✓ Success (status: {})", status);
                    summary.success_count += 1;
                }
                ExecOutcome::Failure { status, body } => {
                    println!("    ✗ Error (status: {})", status);
                    println!("    Response: {}", body);
                    summary.error_count += 1;
                }
                ExecOutcome::Exception { message } => {
                    println!("    ✗ Exception: {}", message);
                    summary.error_count += 1;
                }
            }

            summary.reports.push(StatementReport {
                index,
                preview: stmt_preview,
                outcome,
            });
        }

        summary
    }

    /// Prints the final counters and the manual-fallback hint.
    ///
    /// The hint is printed regardless of the counts: when the RPC endpoint
    /// is missing on the target every statement fails with 404 and the web
    /// console is the only way through.
    fn print_summary(&self, summary: &RunSummary, path: &Path) {
        println!("\n\n=== Migration Summary ===");
        println!("Successful statements: {}", summary.success_count);
        println!("Failed statements: {}", summary.error_count);
        println!("\nNote: If all statements failed, the rpc/exec_sql endpoint may not be available.");
        println!(
            "To manually run the migration, visit {} and paste {}",
            MANUAL_CONSOLE_URL,
            path.display()
        );
    }
}
