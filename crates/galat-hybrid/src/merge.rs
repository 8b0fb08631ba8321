use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use galat_core::config::SearchSettings;
use galat_core::traits::{KeywordMatcher, SearchEngine, SemanticMatcher};
use galat_core::types::{Entry, EntryId, SearchResult};
use galat_core::Dataset;
use galat_semantic::TermSimilarityMatcher;
use galat_text::SubstringMatcher;

use crate::tag::filter_by_tag;

/// Semantic-first union of a semantic and a keyword matcher.
///
/// Semantic hits come first, in score order, tagged `semantic`. Keyword hits
/// not already present follow in dataset order, tagged `keyword` with the
/// fixed `keyword_score`. No id appears twice.
pub struct HybridSearchEngine<KM = SubstringMatcher, SM = TermSimilarityMatcher>
where
    KM: KeywordMatcher,
    SM: SemanticMatcher,
{
    keyword: KM,
    semantic: SM,
    keyword_score: f32,
}

impl HybridSearchEngine {
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(SubstringMatcher::new(), TermSimilarityMatcher::from_settings(settings), settings.keyword_score)
    }
}

impl Default for HybridSearchEngine {
    fn default() -> Self {
        Self::from_settings(&SearchSettings::default())
    }
}

impl<KM, SM> HybridSearchEngine<KM, SM>
where
    KM: KeywordMatcher,
    SM: SemanticMatcher,
{
    pub fn new(keyword: KM, semantic: SM, keyword_score: f32) -> Self {
        Self { keyword, semantic, keyword_score }
    }

    /// Merges both passes over an already tag-filtered set.
    ///
    /// A blank query runs no search and returns the set undecorated.
    pub fn merge(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return entries.iter().cloned().map(SearchResult::browse).collect();
        }

        let semantic_hits = self.semantic.rank(query, entries);
        let keyword_hits = self.keyword.find(query, entries);
        let (semantic_count, keyword_count) = (semantic_hits.len(), keyword_hits.len());

        let mut seen: HashSet<EntryId> = HashSet::with_capacity(semantic_count + keyword_count);
        let mut merged = Vec::with_capacity(semantic_count + keyword_count);
        for hit in semantic_hits {
            if seen.insert(hit.entry.id.clone()) {
                merged.push(SearchResult::semantic(hit));
            }
        }
        for entry in keyword_hits {
            if seen.insert(entry.id.clone()) {
                merged.push(SearchResult::keyword(entry, self.keyword_score));
            }
        }
        debug!(query, semantic = semantic_count, keyword = keyword_count, merged = merged.len(), "hybrid merge");
        merged
    }
}

impl<KM, SM> SearchEngine for HybridSearchEngine<KM, SM>
where
    KM: KeywordMatcher,
    SM: SemanticMatcher,
{
    fn search(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<SearchResult> {
        Self::merge(self, query, entries)
    }
}

/// Results for one `(committed query, tag)` pair over a dataset.
///
/// Pure: same inputs, same output. The tag narrows the set first, then the
/// engine runs over what is left.
pub fn compute_results<E: SearchEngine + ?Sized>(
    engine: &E,
    dataset: &Dataset,
    committed_query: &str,
    tag: Option<&str>,
) -> Vec<SearchResult> {
    let working_set = filter_by_tag(tag, dataset.entries());
    engine.search(committed_query, &working_set)
}
