//! Citation-marker tokenization.
//!
//! Recognizes the exact literal form `[Source N]`, N one or more digits, and
//! splits the input into plain runs and citation tokens. Every input
//! character is accounted for by exactly one plain run or consumed by
//! exactly one marker's bracket syntax.
//!
//! The scan keeps an explicit cursor at the end of the previous match; each
//! match starts at or after it, so the pass terminates on any input,
//! including empty text (no tokens) and back-to-back markers (adjacent
//! citation tokens with no text run between them).
//!
//! No upper bound is checked on N here; that is the resolver's concern. The
//! one exception is digits that overflow `usize`, which stay literal text so
//! the stream still reconstructs its source exactly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::brief::ast::InlineToken;

/// The citation marker pattern. The bracket syntax is fixed; only the index
/// varies.
static CITATION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[Source (\d+)\]").unwrap());

const MARKER_PREFIX: &str = "[Source ";
const MARKER_SUFFIX: &str = "]";

/// Split `text` into an ordered stream of plain-text runs and citation
/// tokens. Bold spans are not recognized here; see
/// [`super::emphasis::split_bold_spans`].
pub fn tokenize_citations(text: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for marker in CITATION_MARKER.find_iter(text) {
        if marker.start() > cursor {
            tokens.push(InlineToken::Text(text[cursor..marker.start()].to_string()));
        }

        let digits = &text[marker.start() + MARKER_PREFIX.len()..marker.end() - MARKER_SUFFIX.len()];
        match digits.parse::<usize>() {
            Ok(index) => tokens.push(InlineToken::SourceRef(index)),
            Err(_) => tokens.push(InlineToken::Text(marker.as_str().to_string())),
        }

        cursor = marker.end();
    }

    if cursor < text.len() {
        tokens.push(InlineToken::Text(text[cursor..].to_string()));
    }

    tokens
}
