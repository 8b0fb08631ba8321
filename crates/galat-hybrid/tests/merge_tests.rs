use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use galat_core::{Dataset, Entry, SearchType};
use galat_hybrid::{compute_results, filter_by_tag, HybridSearchEngine};

fn entry(id: &str, titre: &str, citation: &str, tag: &str) -> Entry {
    let mut e = Entry::new(id);
    e.titre = titre.to_string();
    e.citation = citation.to_string();
    e.tag = tag.to_string();
    e
}

fn galerie() -> Dataset {
    Dataset::new(vec![
        entry("A", "Wiki libre", "", "Outils"),
        entry("B", "", "la liberté numérique", "Art"),
        entry("C", "Framasoft", "Dégooglisons Internet", "Outils"),
        entry("D", "Calibre", "", "Outils"),
    ])
    .expect("dataset")
}

#[test]
fn libre_scenario_returns_both_without_duplicates() {
    let dataset = galerie();
    let engine = HybridSearchEngine::default();
    let results = compute_results(&engine, &dataset, "libre", None);

    let ids: Vec<&str> = results.iter().map(|r| r.id().as_str()).collect();
    assert!(ids.contains(&"A"));
    assert!(ids.contains(&"B"));
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    let b = results.iter().find(|r| r.id().as_str() == "B").expect("B present");
    assert_eq!(b.search_type, Some(SearchType::Semantic));
    let b_pos = ids.iter().position(|id| *id == "B").expect("B position");
    for (pos, r) in results.iter().enumerate() {
        if r.search_type == Some(SearchType::Keyword) {
            assert!(b_pos < pos, "semantic B must outrank keyword-only {}", r.id());
        }
    }
}

#[test]
fn keyword_only_hits_get_minimal_score() {
    let dataset = galerie();
    let engine = HybridSearchEngine::default();
    // "calibre" contains "libre" literally but shares no root with it.
    let results = compute_results(&engine, &dataset, "libre", None);
    let d = results.iter().find(|r| r.id().as_str() == "D").expect("D via keyword");
    assert_eq!(d.search_type, Some(SearchType::Keyword));
    assert_eq!(d.similarity_score, Some(0.05));
    assert_eq!(results.last().map(|r| r.id().as_str()), Some("D"));
}

#[test]
fn blank_query_with_tag_is_plain_browsing() {
    let dataset = galerie();
    let engine = HybridSearchEngine::default();
    let results = compute_results(&engine, &dataset, "   ", Some("Outils"));
    let ids: Vec<&str> = results.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["A", "C", "D"]);
    for r in &results {
        assert_eq!(r.search_type, None);
        assert_eq!(r.similarity_score, None);
        assert!(Arc::ptr_eq(&r.entry, dataset.get(r.id()).expect("same entry")));
    }
}

#[test]
fn tag_narrows_before_search() {
    let dataset = galerie();
    let engine = HybridSearchEngine::default();
    let results = compute_results(&engine, &dataset, "libre", Some("Art"));
    let ids: Vec<&str> = results.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, ["B"]);
}

#[test]
fn unknown_tag_and_empty_dataset_give_nothing() {
    let engine = HybridSearchEngine::default();
    assert!(compute_results(&engine, &galerie(), "", Some("Inconnu")).is_empty());
    let empty = Dataset::default();
    assert!(compute_results(&engine, &empty, "libre", None).is_empty());
    assert!(compute_results(&engine, &empty, "", None).is_empty());
}

#[test]
fn serialized_result_carries_provenance() {
    let dataset = galerie();
    let results = compute_results(&HybridSearchEngine::default(), &dataset, "framasoft", None);
    let json = serde_json::to_value(&results[0]).expect("json");
    assert_eq!(json["id"], "C");
    assert_eq!(json["searchType"], "semantic");
    assert!(json["similarityScore"].as_f64().is_some());

    let browse = compute_results(&HybridSearchEngine::default(), &dataset, "", None);
    let json = serde_json::to_value(&browse[0]).expect("json");
    assert!(json.get("searchType").is_none());
}

fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
    let words = prop::sample::select(vec![
        "libre", "liberté", "outil", "outils", "réseau", "art", "wiki", "données", "calibre", "code",
    ]);
    let tags = prop::sample::select(vec!["Outils", "Art", "Médias", ""]);
    prop::collection::vec((prop::collection::vec(words, 0..5), tags), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (ws, tag))| entry(&i.to_string(), &ws.join(" "), "", tag))
            .collect()
    })
}

proptest! {
    #[test]
    fn merged_results_are_unique_and_ordered(
        entries in arb_entries(),
        query in prop::sample::select(vec!["libre", "outils", "art wiki", "données code", "ré"]),
        tag in prop::sample::select(vec![None, Some("Outils"), Some("Art"), Some("")]),
    ) {
        let dataset = Dataset::new(entries).expect("dataset");
        let results = compute_results(&HybridSearchEngine::default(), &dataset, query, tag);

        let mut seen = HashSet::new();
        for r in &results {
            prop_assert!(seen.insert(r.id().clone()), "duplicate id {}", r.id());
        }

        let first_keyword = results.iter().position(|r| r.search_type == Some(SearchType::Keyword));
        if let Some(first) = first_keyword {
            prop_assert!(results[first..].iter().all(|r| r.search_type == Some(SearchType::Keyword)));
        }
        let semantic_scores: Vec<f32> = results
            .iter()
            .filter(|r| r.search_type == Some(SearchType::Semantic))
            .filter_map(|r| r.similarity_score)
            .collect();
        prop_assert!(semantic_scores.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(semantic_scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn tag_filter_is_a_subset(
        entries in arb_entries(),
        tag in prop::sample::select(vec!["Outils", "Art", "Médias", "Inconnu"]),
    ) {
        let dataset = Dataset::new(entries).expect("dataset");
        let all = dataset.entries();
        let filtered = filter_by_tag(Some(tag), all);
        prop_assert!(filtered.iter().all(|e| all.iter().any(|x| Arc::ptr_eq(x, e))));
        prop_assert!(filtered.iter().all(|e| e.tag == tag));

        let unfiltered = filter_by_tag(Some(""), all);
        prop_assert_eq!(unfiltered.len(), all.len());
        prop_assert!(unfiltered.iter().zip(all).all(|(a, b)| Arc::ptr_eq(a, b)));
        prop_assert_eq!(filter_by_tag(None, all).len(), all.len());
    }
}
