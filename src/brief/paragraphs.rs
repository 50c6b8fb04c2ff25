//! Paragraph grouping for the summary token stream.
//!
//! The model is prompted to end each summary paragraph with one or more
//! citation markers, so a paragraph boundary sits immediately after a
//! citation token whose successor is a text or bold token, or is absent. A
//! run of consecutive citations is never split across paragraphs, and a
//! trailing group without a closing citation is still flushed.

use crate::brief::ast::{InlineToken, Paragraph};

/// Regroup a flat token stream into ordered paragraph units.
pub fn group_paragraphs(tokens: &[InlineToken]) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        current.push(token.clone());

        let next = tokens.get(position + 1);
        let closes_paragraph =
            token.is_source_ref() && next.map_or(true, |token| !token.is_source_ref());
        if closes_paragraph {
            paragraphs.push(Paragraph(std::mem::take(&mut current)));
        }
    }

    if !current.is_empty() {
        paragraphs.push(Paragraph(current));
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str) -> InlineToken {
        InlineToken::Text(content.to_string())
    }

    #[test]
    fn test_citation_followed_by_text_closes_paragraph() {
        let tokens = vec![text("a"), InlineToken::SourceRef(1), text("b")];
        let paragraphs = group_paragraphs(&tokens);
        assert_eq!(
            paragraphs,
            vec![
                Paragraph(vec![text("a"), InlineToken::SourceRef(1)]),
                Paragraph(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn test_citation_run_is_never_split() {
        let tokens = vec![
            text("a"),
            InlineToken::SourceRef(1),
            InlineToken::SourceRef(3),
            text("b"),
            InlineToken::SourceRef(2),
        ];
        let paragraphs = group_paragraphs(&tokens);
        assert_eq!(
            paragraphs,
            vec![
                Paragraph(vec![
                    text("a"),
                    InlineToken::SourceRef(1),
                    InlineToken::SourceRef(3),
                ]),
                Paragraph(vec![text("b"), InlineToken::SourceRef(2)]),
            ]
        );
    }

    #[test]
    fn test_trailing_text_flushes_as_final_paragraph() {
        let tokens = vec![text("no citations here")];
        assert_eq!(
            group_paragraphs(&tokens),
            vec![Paragraph(vec![text("no citations here")])]
        );
    }

    #[test]
    fn test_bold_after_citation_also_closes() {
        let tokens = vec![
            InlineToken::SourceRef(1),
            InlineToken::Bold("next".to_string()),
        ];
        let paragraphs = group_paragraphs(&tokens);
        assert_eq!(paragraphs.len(), 2);
    }

    #[test]
    fn test_empty_stream() {
        assert!(group_paragraphs(&[]).is_empty());
    }
}
