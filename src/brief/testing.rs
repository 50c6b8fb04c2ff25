//! Canonical sample inputs shared by unit and integration tests.
//!
//! Tests should prefer these over ad-hoc copies so the whole suite
//! exercises the same raw shapes: one brief that follows the prompted
//! layout exactly, and one that omits every header.

use crate::brief::ast::SourceRecord;

/// A brief that follows the prompted three-section layout.
pub const WELL_FORMED_BRIEF: &str = "\
## Summary
Rust guarantees memory safety without garbage collection [Source 1].

Its ownership model is checked at compile time [Source 2][Source 3].

## Key Points
- **Ownership** prevents data races[Source 2]
- No runtime garbage collector[Source 1]

## Related Queries
- How does the borrow checker work?
- What is lifetime elision?
";

/// A brief with no headers at all; only the label-scan fallback can find
/// its lists.
pub const HEADERLESS_BRIEF: &str = "\
Rust focuses on safety and performance [Source 1].

Here are the key points to remember:
- Zero-cost abstractions
- Fearless concurrency

Some related queries you might try:
- Is Rust good for embedded?
";

/// An ordered source list with `count` records, indexed 1..=count.
pub fn sample_sources(count: usize) -> Vec<SourceRecord> {
    (1..=count)
        .map(|n| SourceRecord {
            title: Some(format!("Source Title {n}")),
            snippet: format!("Snippet text for source {n}."),
            link: format!("https://example.com/{n}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sources_are_ordered() {
        let sources = sample_sources(2);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].link, "https://example.com/1");
        assert_eq!(sources[1].link, "https://example.com/2");
    }
}
