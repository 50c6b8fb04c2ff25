//! Section-level structuring of raw model output.
//!
//! The model is prompted for three sections in canonical order: Summary,
//! Key Points, Related Queries. It only loosely obeys. This module splits
//! the raw text at recognized header lines, extracts bullet lists with a
//! whole-text fallback scan, and sanitizes the summary prose.

pub mod lists;
pub mod sanitize;
pub mod split;

pub use lists::extract_list;
pub use sanitize::clean_markdown;
pub use split::{split_sections, RawSections, Section};
