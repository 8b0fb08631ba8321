use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use galat_core::config::SearchSettings;
use galat_core::traits::SemanticMatcher;
use galat_core::Entry;
use galat_semantic::{RootAffinity, Similarity, TermSimilarityMatcher};

fn entry(id: &str, titre: &str, texte: &str) -> Arc<Entry> {
    let mut e = Entry::new(id);
    e.titre = titre.to_string();
    e.texte = texte.to_string();
    Arc::new(e)
}

fn corpus() -> Vec<Arc<Entry>> {
    vec![
        entry("wiki", "Wiki libre", "Une encyclopédie écrite par ses lecteurs"),
        entry("quote", "", "la liberté numérique"),
        entry("mastodon", "Mastodon", "Un réseau social décentralisé et fédéré"),
        entry("cuisine", "Recettes", "Gratin dauphinois et tarte aux pommes"),
    ]
}

#[test]
fn root_match_reaches_related_entries() {
    let matcher = TermSimilarityMatcher::default();
    let hits = matcher.rank("libre", &corpus());
    let ids: Vec<&str> = hits.iter().map(|h| h.entry.id.as_str()).collect();
    assert_eq!(ids, ["wiki", "quote"], "exact match first, shared root second");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn unrelated_entries_never_leak() {
    let matcher = TermSimilarityMatcher::default();
    let hits = matcher.rank("réseaux décentralisés", &corpus());
    assert!(hits.iter().all(|h| h.entry.id.as_str() != "cuisine"));
    assert!(hits.iter().all(|h| h.score >= matcher.threshold()));
}

#[test]
fn degrades_to_empty() {
    let matcher = TermSimilarityMatcher::default();
    assert!(matcher.rank("", &corpus()).is_empty());
    assert!(matcher.rank("le la de", &corpus()).is_empty(), "stop words only");
    assert!(matcher.rank("libre", &[]).is_empty());
}

#[test]
fn ties_keep_dataset_order() {
    let entries = vec![entry("b", "Outils libres", ""), entry("a", "Outils libres", "")];
    let hits = TermSimilarityMatcher::default().rank("outils", &entries);
    let ids: Vec<&str> = hits.iter().map(|h| h.entry.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn higher_threshold_is_stricter() {
    let strict = SearchSettings { semantic_threshold: 0.9, ..SearchSettings::default() };
    let hits = TermSimilarityMatcher::from_settings(&strict).rank("libre", &corpus());
    assert_eq!(hits.len(), 1);
}

fn terms(words: &[String]) -> BTreeSet<String> {
    words.iter().cloned().collect()
}

proptest! {
    #[test]
    fn score_is_bounded_and_order_free(
        query in prop::collection::vec("[a-e]{3,6}", 1..4),
        entry_words in prop::collection::vec("[a-e]{3,6}", 0..8),
    ) {
        let s = RootAffinity::default();
        let score = s.score(&terms(&query), &terms(&entry_words));
        prop_assert!((0.0..=1.0).contains(&score));
        let mut reversed = entry_words.clone();
        reversed.reverse();
        prop_assert_eq!(score, s.score(&terms(&query), &terms(&reversed)));
    }

    #[test]
    fn adding_a_matching_term_never_lowers_the_score(
        query in prop::collection::vec("[a-e]{3,6}", 1..4),
        entry_words in prop::collection::vec("[a-e]{3,6}", 0..8),
        pick in 0usize..4,
    ) {
        let s = RootAffinity::default();
        let before = s.score(&terms(&query), &terms(&entry_words));
        let mut grown = entry_words.clone();
        grown.push(query[pick % query.len()].clone());
        let after = s.score(&terms(&query), &terms(&grown));
        prop_assert!(after >= before, "before={} after={}", before, after);
    }
}
