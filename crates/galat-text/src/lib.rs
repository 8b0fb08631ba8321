//! galat-text
//!
//! Literal text handling: accent-folding normalization, the substring keyword
//! matcher, and the tantivy analyzer that turns text into searchable terms.
pub mod analyzer;
pub mod keyword;
pub mod normalize;

pub use analyzer::TermAnalyzer;
pub use keyword::SubstringMatcher;
pub use normalize::normalize;
