use std::collections::BTreeSet;

use galat_core::config::SearchSettings;

/// Scores how well an entry's terms cover a query's terms, in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn score(&self, query_terms: &BTreeSet<String>, entry_terms: &BTreeSet<String>) -> f32;
}

/// Mean best-match affinity of each query term against the entry terms.
///
/// Two terms are affine when equal (1.0) or when they share a root: a common
/// prefix of at least `min_len` characters that covers at least `ratio` of the
/// shorter term. A root match is worth `weight * prefix / shorter`, always
/// strictly below an exact match.
///
/// The score only looks at sets, so it is insensitive to word order, and it
/// takes a maximum per query term, so extra entry terms can only raise it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootAffinity {
    pub min_len: usize,
    pub ratio: f32,
    pub weight: f32,
}

impl Default for RootAffinity {
    fn default() -> Self {
        Self::from_settings(&SearchSettings::default())
    }
}

impl RootAffinity {
    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self { min_len: settings.root_min_len, ratio: settings.root_ratio, weight: settings.root_weight }
    }

    pub fn affinity(&self, a: &str, b: &str) -> f32 {
        if a == b {
            return 1.0;
        }
        let prefix = a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();
        let shorter = a.chars().count().min(b.chars().count());
        if shorter == 0 || prefix < self.min_len {
            return 0.0;
        }
        let coverage = prefix as f32 / shorter as f32;
        if coverage + f32::EPSILON < self.ratio {
            return 0.0;
        }
        self.weight * coverage
    }
}

impl Similarity for RootAffinity {
    fn score(&self, query_terms: &BTreeSet<String>, entry_terms: &BTreeSet<String>) -> f32 {
        if query_terms.is_empty() || entry_terms.is_empty() {
            return 0.0;
        }
        let total: f32 = query_terms
            .iter()
            .map(|q| entry_terms.iter().map(|t| self.affinity(q, t)).fold(0.0_f32, f32::max))
            .sum();
        (total / query_terms.len() as f32).clamp(0.0, 1.0)
    }
}
