//! Statement loading for sqlrelay.
//!
//! Splits a SQL file into candidate statements by naive `;` splitting and
//! filters out comment-only and empty fragments. The split is purely
//! syntactic: a `;` inside a string literal or function body will fragment
//! the statement — the fragment lint in [`crate::check`] warns about that
//! case at runtime.

/// Statements shorter than this (after trimming) are skipped at execution
/// time. A second, redundant heuristic gate on top of the load-time filter.
pub const MIN_STATEMENT_LEN: usize = 10;

/// Maximum number of characters shown in a statement preview line.
pub const PREVIEW_LEN: usize = 80;

/// Splits SQL text into candidate statements.
///
/// Splits on `;`, trims each fragment, and drops fragments that are empty
/// or start with a `--` comment marker. Pure function of its input; the
/// result preserves file order.
pub fn load_statements(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with("--"))
        .map(String::from)
        .collect()
}

/// Renders a single-line preview of a statement.
///
/// Newlines are collapsed to spaces; output is capped at [`PREVIEW_LEN`]
/// characters with `...` appended when truncated.
pub fn preview(stmt: &str) -> String {
    let collapsed: String = stmt
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    if collapsed.chars().count() > PREVIEW_LEN {
        let truncated: String = collapsed.chars().take(PREVIEW_LEN).collect();
        format!("{truncated}...")
    } else {
        collapsed
    }
}
