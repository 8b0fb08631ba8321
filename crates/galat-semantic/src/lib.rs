//! galat-semantic
//!
//! Term-overlap relevance matching. Query and entry text are reduced to sets of
//! meaningful terms; terms sharing a root count as partial matches, so
//! "libre" still finds "liberté".
pub mod matcher;
pub mod similarity;

pub use matcher::TermSimilarityMatcher;
pub use similarity::{RootAffinity, Similarity};
