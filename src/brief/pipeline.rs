//! The structuring pipeline: raw model text to a fully populated brief.
//!
//! One total entry point combining the section split, summary sanitization,
//! and list extraction, so callers never branch on missing fields. Every
//! deviation from the prompted layout is absorbed by a fallback; no input,
//! including the empty string, makes this fail.

use crate::brief::ast::StructuredBrief;
use crate::brief::sections::{clean_markdown, extract_list, split_sections, Section};

/// Structure raw model output into the three named sections.
pub fn parse_brief(raw: &str) -> StructuredBrief {
    let sections = split_sections(raw);
    StructuredBrief {
        summary: clean_markdown(&sections.summary),
        key_points: extract_list(&sections.key_points, raw, Section::KeyPoints.label()),
        related_queries: extract_list(
            &sections.related_queries,
            raw,
            Section::RelatedQueries.label(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::testing::WELL_FORMED_BRIEF;

    #[test]
    fn test_well_formed_brief() {
        let brief = parse_brief(WELL_FORMED_BRIEF);
        assert_eq!(
            brief.summary,
            "Rust guarantees memory safety without garbage collection [Source 1]. \
             Its ownership model is checked at compile time [Source 2][Source 3]."
        );
        assert_eq!(
            brief.key_points,
            vec![
                "**Ownership** prevents data races[Source 2]",
                "No runtime garbage collector[Source 1]",
            ]
        );
        assert_eq!(
            brief.related_queries,
            vec!["How does the borrow checker work?", "What is lifetime elision?"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_but_well_formed_brief() {
        let brief = parse_brief("");
        assert_eq!(brief.summary, "");
        assert!(brief.key_points.is_empty());
        assert!(brief.related_queries.is_empty());
    }

    #[test]
    fn test_summary_is_sanitized_but_lists_keep_markup() {
        let raw = "## Summary\n**Bold** prose.\n\n## Key Points\n- **bold** point\n";
        let brief = parse_brief(raw);
        // The sanitization asymmetry is deliberate: summary loses emphasis,
        // list items keep their markers for tokenized rendering.
        assert_eq!(brief.summary, "Bold prose.");
        assert_eq!(brief.key_points, vec!["**bold** point"]);
    }

    #[test]
    fn test_missing_list_headers_fall_back_to_label_scan() {
        let raw = "Rust prose.\n\nThe key points mentioned:\n- a\n- b\n";
        let brief = parse_brief(raw);
        assert_eq!(brief.key_points, vec!["a", "b"]);
        assert!(brief.related_queries.is_empty());
    }
}
