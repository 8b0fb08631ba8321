use std::sync::Arc;
use tracing::trace;

use galat_core::config::SearchSettings;
use galat_core::traits::SemanticMatcher;
use galat_core::types::{Entry, ScoredEntry};
use galat_text::TermAnalyzer;

use crate::similarity::{RootAffinity, Similarity};

/// Semantic matcher over shared meaningful terms.
///
/// Entries scoring below `threshold` are dropped, not just ranked low, so an
/// unrelated entry can never take a semantic slot ahead of a literal match.
/// Ordering is by descending score; the sort is stable, so equal scores keep
/// dataset order.
#[derive(Clone)]
pub struct TermSimilarityMatcher<S = RootAffinity> {
    analyzer: TermAnalyzer,
    similarity: S,
    threshold: f32,
}

impl TermSimilarityMatcher<RootAffinity> {
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(
            TermAnalyzer::new(settings.min_term_len),
            RootAffinity::from_settings(settings),
            settings.semantic_threshold,
        )
    }
}

impl Default for TermSimilarityMatcher<RootAffinity> {
    fn default() -> Self {
        Self::from_settings(&SearchSettings::default())
    }
}

impl<S: Similarity> TermSimilarityMatcher<S> {
    pub fn new(analyzer: TermAnalyzer, similarity: S, threshold: f32) -> Self {
        Self { analyzer, similarity, threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<S: Similarity> SemanticMatcher for TermSimilarityMatcher<S> {
    fn rank(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<ScoredEntry> {
        if entries.is_empty() {
            return Vec::new();
        }
        let mut analyzer = self.analyzer.clone();
        let query_terms = analyzer.terms(query);
        if query_terms.is_empty() {
            trace!(query, "no meaningful query terms");
            return Vec::new();
        }

        let mut hits: Vec<ScoredEntry> = entries
            .iter()
            .filter_map(|entry| {
                let entry_terms = analyzer.terms_of(entry.searchable_fields());
                let score = self.similarity.score(&query_terms, &entry_terms);
                (score >= self.threshold).then(|| ScoredEntry { entry: Arc::clone(entry), score })
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        trace!(query, terms = query_terms.len(), scanned = entries.len(), hits = hits.len(), "semantic pass");
        hits
    }
}
