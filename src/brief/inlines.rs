//! Inline tokenization of text fields.
//!
//! Two passes over each text field, both driven by an explicit,
//! monotonically advancing cursor rather than any engine-managed match
//! state:
//!
//! 1. [`tokenizer`] splits the text into plain runs and `[Source N]`
//!    citation markers.
//! 2. [`emphasis`] splits each plain run into plain and `**bold**` spans.
//!
//! [`tokenize_inlines`] composes the two.

pub mod emphasis;
pub mod tokenizer;

use crate::brief::ast::InlineToken;

/// Tokenize a text field into its full ordered inline token stream.
pub fn tokenize_inlines(text: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    for token in tokenizer::tokenize_citations(text) {
        match token {
            InlineToken::Text(run) => tokens.extend(emphasis::split_bold_spans(&run)),
            other => tokens.push(other),
        }
    }
    tokens
}
