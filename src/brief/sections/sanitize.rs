//! Markdown sanitization for the summary field.
//!
//! Applied only to the summary: heading markers and bold delimiters are
//! stripped (bold inner text is kept, so emphasis information is discarded)
//! and whitespace runs collapse to single spaces. Key points and related
//! queries are deliberately left untouched so their `**` markers survive for
//! tokenized rendering.
//!
//! Idempotent: sanitizing already-sanitized text is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+").unwrap());
static BOLD_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip structural markup from a text field, leaving plain prose.
///
/// Rules, in order: remove heading-marker runs, remove `**` delimiters,
/// collapse whitespace runs to a single space, trim.
pub fn clean_markdown(text: &str) -> String {
    let text = HEADING_MARKERS.replace_all(text, "");
    let text = BOLD_DELIMITERS.replace_all(&text, "");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
