//! Prompt construction for the generation collaborator.
//!
//! The prompt numbers the sources in list order, so the `[Source N]`
//! markers the model emits are 1-based indices into the same list the
//! response passes through to rendering.

use crate::brief::ast::SourceRecord;

/// Render the numbered source block fed into the prompt.
pub fn sources_block(sources: &[SourceRecord]) -> String {
    sources
        .iter()
        .enumerate()
        .map(|(position, record)| {
            format!(
                "[Source {}] \"{}\"\n{}\nURL: {}",
                position + 1,
                record.title_or_default(),
                record.snippet,
                record.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full generation prompt requesting the three-section layout.
pub fn build_prompt(sources: &[SourceRecord]) -> String {
    format!(
        "Analyze the following search results and generate a structured response:\n\
         \n\
         ## Summary\n\
         Write several paragraphs separated by blank lines. Each paragraph focuses\n\
         on one main idea, begins with a topic sentence, and cites its sources with\n\
         [Source #] markers.\n\
         \n\
         ## Key Points\n\
         - Bullet with source [Source #]\n\
         - Bullet with source [Source #]\n\
         \n\
         ## Related Queries\n\
         - Suggested follow-up question\n\
         - Suggested follow-up question\n\
         \n\
         Guidelines:\n\
         1. Keep exactly these three sections with these exact headers.\n\
         2. Separate summary paragraphs with blank lines only.\n\
         3. Use no markdown except the section headers and **bold** emphasis.\n\
         4. Include citations in every paragraph and key point.\n\
         \n\
         Search Results:\n\
         {}",
        sources_block(sources)
    )
}
