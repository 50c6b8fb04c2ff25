//! # brief
//!
//! A structuring parser for model-generated research briefs.
//!
//! Generative models asked to produce a "Summary / Key Points / Related
//! Queries" brief only loosely honor the requested layout. This crate turns
//! that loosely-structured prose into a structured, citation-aware document:
//! section splitting with fallback anchors, bullet-list extraction, inline
//! tokenization of `[Source N]` citation markers and `**bold**` spans,
//! citation resolution against a bounded source list, and paragraph grouping
//! for rendering.
//!
//! Every operation in the core is total: arbitrary input, including the
//! empty string, yields a well-formed (possibly empty) structure.

pub mod brief;

pub use brief::ast::{BriefResponse, InlineToken, Paragraph, SourceRecord, StructuredBrief};
pub use brief::citations::resolve_citation;
pub use brief::inlines::tokenize_inlines;
pub use brief::paragraphs::group_paragraphs;
pub use brief::pipeline::parse_brief;
