//! Output formats for brief responses and token streams.
//!
//! JSON and YAML serialize the response contract verbatim. The plain
//! format renders the tokenized form: summary paragraphs regrouped at
//! citation boundaries, resolved citations shown as `[n]`, orphan citations
//! degraded to the bare numeral.

use std::fmt;

use crate::brief::ast::{BriefResponse, InlineToken, SourceRecord};
use crate::brief::citations::resolve_citation;
use crate::brief::inlines::tokenize_inlines;
use crate::brief::paragraphs::group_paragraphs;

/// The supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Plain,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "plain" => Ok(OutputFormat::Plain),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }

    pub fn names() -> &'static [&'static str] {
        &["json", "yaml", "plain"]
    }
}

/// Errors that can occur while rendering output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl std::error::Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown format: {}", name),
            FormatError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Render a full response in the requested format.
pub fn render_response(
    response: &BriefResponse,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(response)
            .map_err(|e| FormatError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(response)
            .map_err(|e| FormatError::Serialization(e.to_string())),
        OutputFormat::Plain => Ok(render_plain(response)),
    }
}

/// Serialize a token stream as JSON, for inspection.
pub fn render_tokens(tokens: &[InlineToken]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tokens).map_err(|e| FormatError::Serialization(e.to_string()))
}

/// One inline token as plain text, resolving citations against `sources`.
pub fn render_token(token: &InlineToken, sources: &[SourceRecord]) -> String {
    match token {
        InlineToken::Text(text) | InlineToken::Bold(text) => text.clone(),
        InlineToken::SourceRef(index) => match resolve_citation(*index, sources) {
            Some(_) => format!("[{}]", index),
            // Orphan citation: degrade to the bare numeral.
            None => index.to_string(),
        },
    }
}

fn render_field(text: &str, sources: &[SourceRecord]) -> String {
    tokenize_inlines(text)
        .iter()
        .map(|token| render_token(token, sources))
        .collect()
}

fn render_plain(response: &BriefResponse) -> String {
    let mut out = String::new();

    out.push_str("Summary:\n");
    let tokens = tokenize_inlines(&response.summary);
    for paragraph in group_paragraphs(&tokens) {
        let line: String = paragraph
            .tokens()
            .iter()
            .map(|token| render_token(token, &response.sources))
            .collect();
        out.push_str("  ");
        out.push_str(line.trim());
        out.push('\n');
    }

    out.push_str("\nKey Points:\n");
    for point in &response.key_points {
        out.push_str("  - ");
        out.push_str(&render_field(point, &response.sources));
        out.push('\n');
    }

    out.push_str("\nRelated Queries:\n");
    for query in &response.related_queries {
        out.push_str("  - ");
        out.push_str(&render_field(query, &response.sources));
        out.push('\n');
    }

    out.push_str("\nSources:\n");
    for (position, source) in response.sources.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} <{}>\n",
            position + 1,
            source.title_or_default(),
            source.link
        ));
    }

    out
}
