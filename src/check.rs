//! Fragment lint for naively split statements.
//!
//! The `;` split in [`crate::statements`] is purely syntactic, so a
//! semicolon inside a string literal or a function body fragments its
//! statement. Before executing, each fragment is run through sqlparser with
//! the PostgreSQL dialect; a fragment that does not parse produces a
//! non-fatal warning. Execution proceeds regardless — the lint only flags
//! the suspect fragment, it never gates it.

use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;

/// Parses statement fragments and reports suspect ones.
#[derive(Debug)]
pub struct FragmentChecker {
    dialect: PostgreSqlDialect,
}

impl Default for FragmentChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentChecker {
    /// Creates a new fragment checker.
    pub fn new() -> Self {
        Self {
            dialect: PostgreSqlDialect {},
        }
    }

    /// Returns a warning when the fragment does not parse as SQL.
    ///
    /// `None` means the fragment parsed cleanly.
    pub fn check(&self, sql: &str) -> Option<String> {
        match Parser::parse_sql(&self.dialect, sql) {
            Ok(_) => None,
            Err(e) => Some(format!(
                "statement does not parse cleanly ({}); the source file may contain a ';' inside a string literal or function body",
                e
            )),
        }
    }
}
