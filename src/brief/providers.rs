//! Collaborator boundary: web search and text generation.
//!
//! The crate does not speak HTTP. It consumes two trait-shaped
//! collaborators and owns only the policy around them: filtering search
//! results, building the generation prompt, and degrading to sentinel
//! briefs when a collaborator fails or finds nothing. Nothing in this
//! module panics on provider failure.

pub mod prompt;

use std::fmt;

use crate::brief::ast::{BriefResponse, SourceRecord, StructuredBrief};
use crate::brief::pipeline::parse_brief;

/// Summary used when the search yields no usable sources.
pub const NO_RESULTS_SUMMARY: &str =
    "No relevant information found. Try rephrasing your query.";

/// Summary used when generation fails; the found sources still pass through.
pub const GENERATION_FAILED_SUMMARY: &str = "Unable to generate summary";

/// A web search collaborator: ordered results for a query, bounded by
/// `max_results`.
pub trait SearchProvider {
    fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<SourceRecord>, ProviderError>;
}

/// A generative text collaborator: raw text for a prompt.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Errors a collaborator can surface at this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The remote endpoint answered with a non-success status.
    Status { code: u16, message: String },
    /// The request never completed (timeout, connection failure).
    Transport(String),
    /// The provider needs credentials the caller did not configure.
    MissingCredentials(String),
    /// The provider answered with an empty or unusable body.
    EmptyResponse,
}

impl std::error::Error for ProviderError {}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Status { code, message } => {
                write!(f, "Provider returned status {}: {}", code, message)
            }
            ProviderError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ProviderError::MissingCredentials(name) => {
                write!(f, "Missing credential: {}", name)
            }
            ProviderError::EmptyResponse => write!(f, "Provider returned an empty response"),
        }
    }
}

/// Run one query end to end: search, filter, generate, structure.
///
/// Failure policy:
/// - a failed search degrades to the empty result list;
/// - zero usable sources yields the no-results sentinel with empty sources;
/// - a failed generation yields the generation sentinel, with the found
///   sources passed through.
pub fn run_query<S, G>(
    search: &S,
    generator: &G,
    query: &str,
    max_results: usize,
) -> BriefResponse
where
    S: SearchProvider,
    G: TextGenerator,
{
    let results = search.search(query, max_results).unwrap_or_default();
    let sources = filter_sources(results, max_results);

    if sources.is_empty() {
        return BriefResponse::from_brief(
            StructuredBrief::sentinel(NO_RESULTS_SUMMARY),
            Vec::new(),
        );
    }

    let prompt = prompt::build_prompt(&sources);
    let brief = match generator.generate(&prompt) {
        Ok(raw) => parse_brief(&raw),
        Err(_) => StructuredBrief::sentinel(GENERATION_FAILED_SUMMARY),
    };

    BriefResponse::from_brief(brief, sources)
}

/// Drop results missing a snippet or link and truncate to `max_results`.
pub fn filter_sources(results: Vec<SourceRecord>, max_results: usize) -> Vec<SourceRecord> {
    results
        .into_iter()
        .filter(|record| !record.snippet.is_empty() && !record.link.is_empty())
        .take(max_results)
        .collect()
}
