//! The brief parsing core.
//!
//! Data flow through the core:
//!
//! ```text
//! raw model text
//!     -> sections::split     (three raw substrings, header-anchored)
//!     -> sections::sanitize  (summary only: markdown strip + whitespace collapse)
//!     -> sections::lists     (key points / related queries, with fallback scan)
//!     -> StructuredBrief
//!
//! any text field
//!     -> inlines::tokenizer  (citation markers)
//!     -> inlines::emphasis   (bold spans within text runs)
//!     -> citations           (resolve 1-based indices at render time)
//!     -> paragraphs          (summary only: regroup into paragraph units)
//! ```
//!
//! The `providers` module holds the collaborator boundary (search and text
//! generation), and `pipeline` ties the stages into a single total entry
//! point that always returns a fully populated [`ast::StructuredBrief`].

pub mod ast;
pub mod citations;
pub mod formats;
pub mod inlines;
pub mod paragraphs;
pub mod pipeline;
pub mod providers;
pub mod sections;
pub mod testing;
