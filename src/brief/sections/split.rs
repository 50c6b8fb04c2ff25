//! Header-anchored section splitting.
//!
//! A recognized header is a line whose trimmed form is one or more `#`
//! characters followed by one of the three section names, case-insensitive,
//! with nothing else on the line. A section's raw content runs from the line
//! after its header to the next recognized header line (of any name) or end
//! of text.
//!
//! Models frequently omit the leading "Summary" header, so the summary has a
//! fallback anchor: with no "Summary" header, everything from the start of
//! input up to the first recognized header (or the whole text) is summary.
//! Missing "Key Points" or "Related Queries" headers yield an empty raw
//! substring; list-level fallback lives in [`super::lists`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a recognized section header line, capturing the section name.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*#+\s*(summary|key points|related queries)\s*$").unwrap());

/// The three named sections of a brief, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    KeyPoints,
    RelatedQueries,
}

impl Section {
    /// The section label as it appears in headers and prose.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::KeyPoints => "Key Points",
            Section::RelatedQueries => "Related Queries",
        }
    }
}

/// Raw section substrings, each possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSections {
    pub summary: String,
    pub key_points: String,
    pub related_queries: String,
}

/// Split raw model output into the three raw section substrings.
///
/// Total over arbitrary input; the empty string yields all-empty sections.
pub fn split_sections(raw: &str) -> RawSections {
    let lines: Vec<&str> = raw.lines().collect();
    let headers: Vec<(usize, Section)> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| recognize_header(line).map(|section| (index, section)))
        .collect();

    let summary = match first_header_line(&headers, Section::Summary) {
        Some(header_line) => section_body(&lines, &headers, header_line),
        None => {
            // Fallback anchor: no "Summary" header means the summary is
            // everything before the first recognized header.
            let end = headers.first().map_or(lines.len(), |&(index, _)| index);
            lines[..end].join("\n")
        }
    };

    let key_points = first_header_line(&headers, Section::KeyPoints)
        .map(|header_line| section_body(&lines, &headers, header_line))
        .unwrap_or_default();

    let related_queries = first_header_line(&headers, Section::RelatedQueries)
        .map(|header_line| section_body(&lines, &headers, header_line))
        .unwrap_or_default();

    RawSections {
        summary,
        key_points,
        related_queries,
    }
}

/// Classify a line as a recognized section header.
pub fn recognize_header(line: &str) -> Option<Section> {
    let caps = SECTION_HEADER.captures(line)?;
    match caps[1].to_ascii_lowercase().as_str() {
        "summary" => Some(Section::Summary),
        "key points" => Some(Section::KeyPoints),
        _ => Some(Section::RelatedQueries),
    }
}

/// Line index of the first header for `section`, if present.
fn first_header_line(headers: &[(usize, Section)], section: Section) -> Option<usize> {
    headers
        .iter()
        .find(|&&(_, found)| found == section)
        .map(|&(index, _)| index)
}

/// Content strictly between a header line and the next recognized header
/// (of any name) or end of text.
fn section_body(lines: &[&str], headers: &[(usize, Section)], header_line: usize) -> String {
    let end = headers
        .iter()
        .map(|&(index, _)| index)
        .find(|&index| index > header_line)
        .unwrap_or(lines.len());
    lines[header_line + 1..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_header_depth_and_case() {
        assert_eq!(recognize_header("## Summary"), Some(Section::Summary));
        assert_eq!(recognize_header("# summary"), Some(Section::Summary));
        assert_eq!(recognize_header("###### KEY POINTS"), Some(Section::KeyPoints));
        assert_eq!(
            recognize_header("  ## Related queries  "),
            Some(Section::RelatedQueries)
        );
    }

    #[test]
    fn test_recognize_header_rejects_prose_and_bare_names() {
        // Without a heading marker, "Summary" is prose; it falls under the
        // summary fallback anchor instead.
        assert_eq!(recognize_header("Summary"), None);
        assert_eq!(recognize_header("## Summary of findings"), None);
        assert_eq!(recognize_header("the key points are:"), None);
    }

    #[test]
    fn test_split_canonical_order() {
        let raw = "## Summary\nProse here.\n\n## Key Points\n- a\n\n## Related Queries\n- q";
        let sections = split_sections(raw);
        assert_eq!(sections.summary, "Prose here.\n");
        assert_eq!(sections.key_points, "- a\n");
        assert_eq!(sections.related_queries, "- q");
    }

    #[test]
    fn test_split_missing_summary_header_uses_fallback_anchor() {
        let raw = "Leading prose without a header.\n\n## Key Points\n- a";
        let sections = split_sections(raw);
        assert_eq!(sections.summary, "Leading prose without a header.\n");
        assert_eq!(sections.key_points, "- a");
        assert_eq!(sections.related_queries, "");
    }

    #[test]
    fn test_split_no_headers_at_all() {
        let raw = "Just prose.\nTwo lines.";
        let sections = split_sections(raw);
        assert_eq!(sections.summary, "Just prose.\nTwo lines.");
        assert_eq!(sections.key_points, "");
        assert_eq!(sections.related_queries, "");
    }

    #[test]
    fn test_split_empty_input() {
        let sections = split_sections("");
        assert_eq!(sections, RawSections::default());
    }

    #[test]
    fn test_duplicate_header_terminates_preceding_section() {
        let raw = "## Summary\nfirst\n## Summary\nsecond";
        let sections = split_sections(raw);
        // First occurrence wins; the duplicate still ends the section.
        assert_eq!(sections.summary, "first");
    }

    #[test]
    fn test_reordered_headers() {
        let raw = "## Related Queries\n- q1\n## Summary\nprose";
        let sections = split_sections(raw);
        assert_eq!(sections.related_queries, "- q1");
        assert_eq!(sections.summary, "prose");
        assert_eq!(sections.key_points, "");
    }

    #[test]
    fn test_blank_lines_around_headers_tolerated() {
        let raw = "\n\n  ## Summary  \n\nprose\n\n\n## Key Points\n\n- a\n";
        let sections = split_sections(raw);
        assert_eq!(sections.summary, "\nprose\n\n");
        assert_eq!(sections.key_points, "\n- a");
    }
}
