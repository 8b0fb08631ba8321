use std::sync::Arc;

use crate::types::{Entry, ScoredEntry, SearchResult};

/// Literal matcher: a stable filter over the working set.
pub trait KeywordMatcher: Send + Sync {
    fn find(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<Arc<Entry>>;
}

/// Relevance matcher: entries above its threshold, best first.
pub trait SemanticMatcher: Send + Sync {
    fn rank(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<ScoredEntry>;
}

/// Produces the final ordered result list for an already tag-filtered set.
pub trait SearchEngine: Send + Sync {
    fn search(&self, query: &str, entries: &[Arc<Entry>]) -> Vec<SearchResult>;
}
