use std::sync::Arc;
use tracing::trace;

use galat_core::traits::KeywordMatcher;
use galat_core::types::Entry;

use crate::normalize::normalize;

/// Literal matcher over the normalized searchable fields of an entry.
///
/// An entry matches when any of title, body, author, quote or tag contains the
/// normalized query as a contiguous substring. Output keeps input order. An
/// empty normalized query is contained in everything and therefore matches
/// every entry; callers decide whether to run it at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn matches(&self, needle: &str, entry: &Entry) -> bool {
        entry.searchable_fields().iter().any(|field| normalize(field).contains(needle))
    }
}

impl KeywordMatcher for SubstringMatcher {
    fn find(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
        let needle = normalize(query);
        let hits: Vec<Arc<Entry>> = entries.iter().filter(|e| self.matches(&needle, e)).cloned().collect();
        trace!(query = %needle, scanned = entries.len(), hits = hits.len(), "keyword pass");
        hits
    }
}
