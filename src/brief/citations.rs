//! Citation resolution against the source list.

use crate::brief::ast::SourceRecord;

/// Map a 1-based citation index to its source record.
///
/// Out-of-range indices (below 1 or past the end of the list) are orphan
/// citations and resolve to `None`; rendering then degrades to the bare
/// numeral. Pure and total.
pub fn resolve_citation(index: usize, sources: &[SourceRecord]) -> Option<&SourceRecord> {
    if index >= 1 && index <= sources.len() {
        sources.get(index - 1)
    } else {
        None
    }
}
