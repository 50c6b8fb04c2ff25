//! Bold-span tokenization within a plain text run.
//!
//! A `**` delimiter opens an emphasis span only when a closing `**` exists
//! later in the same run; the first closing delimiter terminates the span
//! (no nesting). Unpaired delimiters stay literal, never an error. Single
//! asterisks are not delimiters. The inner pattern does not cross newlines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::brief::ast::InlineToken;

/// Matches the shortest `**`-delimited span on one line.
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

const DELIMITER_LEN: usize = 2;

/// Split one plain run into plain and bold tokens, same explicit-cursor
/// scan as the citation pass.
pub fn split_bold_spans(run: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for span in BOLD_SPAN.find_iter(run) {
        if span.start() > cursor {
            tokens.push(InlineToken::Text(run[cursor..span.start()].to_string()));
        }
        let inner = &run[span.start() + DELIMITER_LEN..span.end() - DELIMITER_LEN];
        tokens.push(InlineToken::Bold(inner.to_string()));
        cursor = span.end();
    }

    if cursor < run.len() {
        tokens.push(InlineToken::Text(run[cursor..].to_string()));
    }

    tokens
}
