use std::fmt::Write;

use galat_core::types::{EntryKind, SearchResult, SearchType};

/// One result as a text card: quote or image caption first, then category,
/// title, author and body, mirroring the gallery layout.
pub fn render_card(index: usize, result: &SearchResult) -> String {
    let entry = &result.entry;
    let mut out = String::new();
    let provenance = match (result.search_type, result.similarity_score) {
        (Some(SearchType::Semantic), Some(score)) => format!("  [semantic {score:.2}]"),
        (Some(SearchType::Keyword), _) => "  [keyword]".to_string(),
        _ => String::new(),
    };
    let _ = writeln!(out, "{index}. {}{provenance}", entry.display_title());
    if let Some(quote) = entry.featured_quote() {
        let _ = writeln!(out, "   « {quote} »");
    }
    if entry.kind == EntryKind::TextImage {
        let image = if entry.image.trim().is_empty() { "Image" } else { entry.image.as_str() };
        match entry.caption() {
            Some(caption) => {
                let _ = writeln!(out, "   🖼  {image} ({caption})");
            }
            None => {
                let _ = writeln!(out, "   🖼  {image}");
            }
        }
    }
    if !entry.tag.is_empty() {
        let _ = writeln!(out, "   #{} ({})", entry.tag, entry.category_slug());
    }
    if let Some(author) = entry.display_author() {
        let _ = writeln!(out, "   ✍  {author}");
    }
    let _ = writeln!(out, "   {}", entry.display_text());
    if let Some(link) = entry.source_link() {
        let _ = writeln!(out, "   🔗 {link}");
    }
    out
}

pub fn render_results(query: &str, tag: Option<&str>, results: &[SearchResult]) -> String {
    let mut out = String::new();
    let scope = tag.map(|t| format!(" in #{t}")).unwrap_or_default();
    if results.is_empty() {
        let _ = writeln!(out, "Aucun résultat trouvé{scope}");
        let _ = writeln!(out, "Essayez de modifier vos critères de recherche");
        return out;
    }
    if query.trim().is_empty() {
        let _ = writeln!(out, "📚 {} entries{scope}", results.len());
    } else {
        let _ = writeln!(out, "🔍 Found {} results for \"{query}\"{scope}", results.len());
    }
    for (i, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_card(i + 1, result));
    }
    out
}

pub fn render_json(results: &[SearchResult]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
