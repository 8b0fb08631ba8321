use std::sync::Arc;

use proptest::prelude::*;

use galat_core::traits::KeywordMatcher;
use galat_core::Entry;
use galat_text::{normalize, SubstringMatcher};

fn entry(id: &str, titre: &str, citation: &str, tag: &str) -> Arc<Entry> {
    let mut e = Entry::new(id);
    e.titre = titre.to_string();
    e.citation = citation.to_string();
    e.tag = tag.to_string();
    Arc::new(e)
}

fn sample() -> Vec<Arc<Entry>> {
    vec![
        entry("1", "Wiki libre", "", "Outils"),
        entry("2", "", "la liberté numérique", "Art"),
        entry("3", "Réseaux sociaux décentralisés", "", "Médias"),
        entry("4", "Le Fédivers", "", "Médias"),
    ]
}

#[test]
fn keyword_matches_any_searchable_field() {
    let matcher = SubstringMatcher::new();
    let hits = matcher.find("LIBRE", &sample());
    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1"]);

    let hits = matcher.find("médias", &sample());
    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["3", "4"], "tag field is searched and input order kept");
}

#[test]
fn keyword_ignores_accents_on_both_sides() {
    let matcher = SubstringMatcher::new();
    let hits = matcher.find("liberte", &sample());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "2");
    assert_eq!(matcher.find("fedivers", &sample()).len(), 1);
}

#[test]
fn keyword_on_empty_dataset() {
    assert!(SubstringMatcher::new().find("libre", &[]).is_empty());
}

#[test]
fn blank_query_matches_everything_when_invoked() {
    assert_eq!(SubstringMatcher::new().find("   ", &sample()).len(), 4);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_alphabet(s in ".*") {
        let n = normalize(&s);
        prop_assert!(n.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!n.contains("  "));
        prop_assert_eq!(n.trim(), n.as_str());
    }

    #[test]
    fn keyword_hits_contain_the_query(query in "[a-zA-Zéèà ]{1,6}") {
        let entries = sample();
        let needle = normalize(&query);
        for hit in SubstringMatcher::new().find(&query, &entries) {
            prop_assert!(hit.searchable_fields().iter().any(|f| normalize(f).contains(&needle)));
        }
    }
}
