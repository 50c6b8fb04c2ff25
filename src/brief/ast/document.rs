//! Document-level types: source records, structured briefs, responses.

use serde::{Deserialize, Serialize};

/// One web source, as supplied by the search collaborator.
///
/// The core only reads source records; it never mutates or stores them
/// beyond the call that receives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub snippet: String,
    pub link: String,
}

impl SourceRecord {
    /// Display title, falling back for untitled sources.
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Source")
    }
}

/// The three named sections of a brief, after structuring.
///
/// The summary is sanitized prose; key points and related queries keep
/// their inline markup so emphasis and citations survive for tokenized
/// rendering. Always fully populated: a section the model omitted is an
/// empty string or empty list, never a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredBrief {
    pub summary: String,
    pub key_points: Vec<String>,
    pub related_queries: Vec<String>,
}

impl StructuredBrief {
    /// An empty but well-formed brief with the given summary sentence.
    pub fn sentinel(summary: &str) -> Self {
        StructuredBrief {
            summary: summary.to_string(),
            key_points: Vec::new(),
            related_queries: Vec::new(),
        }
    }
}

/// The full response handed to the rendering collaborator: the structured
/// brief plus the source list it cites, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefResponse {
    pub summary: String,
    pub key_points: Vec<String>,
    pub related_queries: Vec<String>,
    pub sources: Vec<SourceRecord>,
}

impl BriefResponse {
    pub fn from_brief(brief: StructuredBrief, sources: Vec<SourceRecord>) -> Self {
        BriefResponse {
            summary: brief.summary,
            key_points: brief.key_points,
            related_queries: brief.related_queries,
            sources,
        }
    }
}
