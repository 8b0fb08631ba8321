//! galat-core
//!
//! Shared domain types for the galat search workspace: the immutable `Entry`
//! schema, the `Dataset` loader, search result decoration, configuration and
//! the matcher traits implemented by the text and semantic crates.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod traits;
pub mod types;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use types::{Entry, EntryId, EntryKind, ScoredEntry, SearchResult, SearchType};
