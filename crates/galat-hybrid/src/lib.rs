//! galat-hybrid
//!
//! Puts the pieces together: tag filtering, the semantic-then-keyword merge,
//! the keystroke debouncer and a stateful search session for UI consumers.
pub mod debounce;
pub mod merge;
pub mod session;
pub mod tag;

pub use debounce::{DebounceEvent, DebounceState, Debouncer};
pub use merge::{compute_results, HybridSearchEngine};
pub use session::SearchSession;
pub use tag::filter_by_tag;
