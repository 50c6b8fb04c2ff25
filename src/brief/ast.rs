//! Data model for structured briefs.
//!
//! All types here are transient values: created within a single parse or
//! tokenize call, immutable afterwards, never shared across invocations.

pub mod document;
pub mod tokens;

pub use document::{BriefResponse, SourceRecord, StructuredBrief};
pub use tokens::{InlineToken, Paragraph};
