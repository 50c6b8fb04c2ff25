//! Inline token types.
//!
//! A text field (the summary prose, a key point, a related query) tokenizes
//! into an ordered stream of inline tokens. The variant set is closed so
//! that every consumption site is exhaustively checked.
//!
//! Content invariant: concatenating the token contents together with the
//! markup the tokenizers discard (`[Source N]` brackets, `**` delimiters)
//! reconstructs the source text exactly. No content character is dropped or
//! duplicated.

use serde::{Deserialize, Serialize};

/// One inline element of a tokenized text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum InlineToken {
    /// A plain text run.
    Text(String),
    /// A bold span; holds the inner text, without the `**` delimiters.
    Bold(String),
    /// A citation marker `[Source N]`; holds the 1-based index N.
    SourceRef(usize),
}

impl InlineToken {
    /// The text this token contributes to the rendered output.
    /// Citation markers contribute nothing; their rendering is decided at
    /// resolution time.
    pub fn content(&self) -> &str {
        match self {
            InlineToken::Text(text) | InlineToken::Bold(text) => text,
            InlineToken::SourceRef(_) => "",
        }
    }

    /// Check if this token is a citation marker.
    pub fn is_source_ref(&self) -> bool {
        matches!(self, InlineToken::SourceRef(_))
    }
}

/// An ordered run of tokens forming one paragraph of the summary field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph(pub Vec<InlineToken>);

impl Paragraph {
    pub fn tokens(&self) -> &[InlineToken] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
