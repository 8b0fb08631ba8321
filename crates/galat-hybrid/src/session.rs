use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

use galat_core::config::SearchSettings;
use galat_core::traits::SearchEngine;
use galat_core::types::SearchResult;
use galat_core::Dataset;

use crate::debounce::Debouncer;
use crate::merge::{compute_results, HybridSearchEngine};

struct Memo {
    query: String,
    tag: Option<String>,
    results: Arc<[SearchResult]>,
}

/// One visitor's search state over a shared dataset.
///
/// The UI feeds raw keystrokes with [`set_query`](Self::set_query), picks a
/// category with [`set_tag`](Self::set_tag), advances time with
/// [`tick`](Self::tick), and reads [`results`](Self::results). Results are
/// recomputed only when the committed query or the tag actually changed.
pub struct SearchSession<E: SearchEngine = HybridSearchEngine> {
    dataset: Arc<Dataset>,
    engine: E,
    debouncer: Debouncer,
    selected_tag: Option<String>,
    memo: Option<Memo>,
}

impl SearchSession {
    pub fn from_settings(dataset: Arc<Dataset>, settings: &SearchSettings) -> Self {
        Self::new(
            dataset,
            HybridSearchEngine::from_settings(settings),
            Duration::from_millis(settings.debounce_ms),
        )
    }
}

impl<E: SearchEngine> SearchSession<E> {
    pub fn new(dataset: Arc<Dataset>, engine: E, debounce: Duration) -> Self {
        Self { dataset, engine, debouncer: Debouncer::new(debounce), selected_tag: None, memo: None }
    }

    /// Raw input changed. Returns the newly committed query if it committed at once.
    pub fn set_query(&mut self, raw: impl Into<String>, now: Instant) -> Option<String> {
        self.debouncer.set_query(raw, now)
    }

    /// Advances the debounce clock. Returns the committed query if one fired.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Selects a category; an empty tag clears the filter.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if tag.is_empty() {
            self.selected_tag = None;
            return;
        }
        if !self.dataset.has_tag(&tag) {
            warn!(tag = %tag, "tag is not part of the dataset tag set");
        }
        self.selected_tag = Some(tag);
    }

    pub fn clear_tag(&mut self) {
        self.selected_tag = None;
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn raw_query(&self) -> &str {
        self.debouncer.raw_query()
    }

    pub fn committed_query(&self) -> &str {
        self.debouncer.committed_query()
    }

    pub fn is_searching(&self) -> bool {
        self.debouncer.is_searching()
    }

    /// When the pending commit is due, for callers that run their own timer.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Results for the current committed query and tag.
    pub fn results(&mut self) -> Arc<[SearchResult]> {
        let query = self.debouncer.committed_query();
        if let Some(memo) = &self.memo {
            if memo.query == query && memo.tag == self.selected_tag {
                return Arc::clone(&memo.results);
            }
        }
        let results: Arc<[SearchResult]> =
            compute_results(&self.engine, &self.dataset, query, self.selected_tag.as_deref()).into();
        debug!(query, tag = ?self.selected_tag, results = results.len(), "results recomputed");
        self.memo = Some(Memo { query: query.to_string(), tag: self.selected_tag.clone(), results: Arc::clone(&results) });
        results
    }
}
