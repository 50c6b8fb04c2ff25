//! End-to-end orchestration tests with stub collaborators.

use std::cell::RefCell;

use brief::brief::providers::{
    run_query, ProviderError, SearchProvider, TextGenerator, GENERATION_FAILED_SUMMARY,
    NO_RESULTS_SUMMARY,
};
use brief::brief::testing::{sample_sources, WELL_FORMED_BRIEF};
use brief::SourceRecord;

struct StubSearch(Result<Vec<SourceRecord>, ProviderError>);

impl SearchProvider for StubSearch {
    fn search(
        &self,
        _query: &str,
        _max_results: usize,
    ) -> Result<Vec<SourceRecord>, ProviderError> {
        self.0.clone()
    }
}

struct StubGenerator {
    response: Result<String, ProviderError>,
    seen_prompt: RefCell<Option<String>>,
}

impl StubGenerator {
    fn ok(raw: &str) -> Self {
        StubGenerator {
            response: Ok(raw.to_string()),
            seen_prompt: RefCell::new(None),
        }
    }

    fn failing() -> Self {
        StubGenerator {
            response: Err(ProviderError::Status {
                code: 500,
                message: "overloaded".to_string(),
            }),
            seen_prompt: RefCell::new(None),
        }
    }
}

impl TextGenerator for StubGenerator {
    fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        *self.seen_prompt.borrow_mut() = Some(prompt.to_string());
        self.response.clone()
    }
}

#[test]
fn test_happy_path_structures_and_passes_sources_through() {
    let search = StubSearch(Ok(sample_sources(3)));
    let generator = StubGenerator::ok(WELL_FORMED_BRIEF);

    let response = run_query(&search, &generator, "rust memory safety", 5);

    assert!(response.summary.starts_with("Rust guarantees memory safety"));
    assert_eq!(response.key_points.len(), 2);
    assert_eq!(response.related_queries.len(), 2);
    assert_eq!(response.sources, sample_sources(3));
}

#[test]
fn test_prompt_numbers_the_filtered_sources() {
    let search = StubSearch(Ok(sample_sources(3)));
    let generator = StubGenerator::ok(WELL_FORMED_BRIEF);

    run_query(&search, &generator, "rust", 5);

    let prompt = generator.seen_prompt.borrow().clone().unwrap();
    assert!(prompt.contains("[Source 1] \"Source Title 1\""));
    assert!(prompt.contains("[Source 3] \"Source Title 3\""));
    assert!(prompt.contains("## Related Queries"));
}

#[test]
fn test_generation_failure_yields_sentinel_with_sources() {
    let search = StubSearch(Ok(sample_sources(2)));
    let generator = StubGenerator::failing();

    let response = run_query(&search, &generator, "rust", 5);

    assert_eq!(response.summary, GENERATION_FAILED_SUMMARY);
    assert!(response.key_points.is_empty());
    assert!(response.related_queries.is_empty());
    // Found sources still pass through.
    assert_eq!(response.sources, sample_sources(2));
}

#[test]
fn test_search_failure_degrades_to_no_results() {
    let search = StubSearch(Err(ProviderError::Transport("timeout".to_string())));
    let generator = StubGenerator::ok(WELL_FORMED_BRIEF);

    let response = run_query(&search, &generator, "rust", 5);

    assert_eq!(response.summary, NO_RESULTS_SUMMARY);
    assert!(response.sources.is_empty());
    // The generator is never consulted without sources.
    assert!(generator.seen_prompt.borrow().is_none());
}

#[test]
fn test_unusable_results_are_filtered_before_generation() {
    let unusable = vec![SourceRecord {
        title: Some("no snippet".to_string()),
        snippet: String::new(),
        link: "https://example.com".to_string(),
    }];
    let search = StubSearch(Ok(unusable));
    let generator = StubGenerator::ok(WELL_FORMED_BRIEF);

    let response = run_query(&search, &generator, "rust", 5);

    assert_eq!(response.summary, NO_RESULTS_SUMMARY);
    assert!(response.sources.is_empty());
}

#[test]
fn test_result_count_is_truncated() {
    let search = StubSearch(Ok(sample_sources(8)));
    let generator = StubGenerator::ok(WELL_FORMED_BRIEF);

    let response = run_query(&search, &generator, "rust", 3);

    assert_eq!(response.sources, sample_sources(3));
}
