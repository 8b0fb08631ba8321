//! Domain types shared by the matchers, the merger and the consumers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Stable identity of an entry, unique within a dataset.
///
/// The source data carries numeric ids as often as string ids; both are
/// accepted at load and kept as their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "entry id must be a non-empty string or a number, got {other}"
            ))),
        }
    }
}

/// Presentation kind of an entry. Only the display layer looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    #[serde(rename = "TEXTE + IMAGE")]
    TextImage,
    #[serde(rename = "TEXTE + CITATION")]
    TextQuote,
    #[default]
    #[serde(rename = "TEXTE")]
    Plain,
}

impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if s == "TEXTE + IMAGE" => Self::TextImage,
            Value::String(s) if s == "TEXTE + CITATION" => Self::TextQuote,
            _ => Self::Plain,
        })
    }
}

/// Any value that is not a JSON string reads as the empty string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// One editorial record: an article, a quote or an illustrated note.
///
/// Every text field is a plain `String`; absent or malformed source values
/// have already been coerced to `""` when the dataset was loaded, so readers
/// never need to guard a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub titre: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub texte: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub auteur: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub citation: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub legende: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

const UNTITLED: &str = "Sans titre";
const NO_CONTENT: &str = "Aucun contenu disponible";
const COLLECTIVE_AUTHOR: &str = "collectif";

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl Entry {
    /// Bare entry with every text field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(id),
            titre: String::new(),
            texte: String::new(),
            auteur: String::new(),
            citation: String::new(),
            tag: String::new(),
            source: String::new(),
            image: String::new(),
            legende: String::new(),
            kind: EntryKind::Plain,
        }
    }

    /// The fields both matchers look into, in a fixed order.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [&self.titre, &self.texte, &self.auteur, &self.citation, &self.tag]
    }

    pub fn display_title(&self) -> &str {
        non_blank(&self.titre).unwrap_or(UNTITLED)
    }

    pub fn display_text(&self) -> &str {
        non_blank(&self.texte).unwrap_or(NO_CONTENT)
    }

    /// Hidden for blank authors and for the "collectif" placeholder.
    pub fn display_author(&self) -> Option<&str> {
        non_blank(&self.auteur).filter(|a| !a.trim().eq_ignore_ascii_case(COLLECTIVE_AUTHOR))
    }

    pub fn caption(&self) -> Option<&str> {
        non_blank(&self.legende)
    }

    pub fn source_link(&self) -> Option<&str> {
        non_blank(&self.source)
    }

    pub fn featured_quote(&self) -> Option<&str> {
        match self.kind {
            EntryKind::TextQuote => non_blank(&self.citation),
            _ => None,
        }
    }

    /// Lowercased tag with the accented `e` variants flattened.
    pub fn category_slug(&self) -> String {
        self.tag
            .to_lowercase()
            .chars()
            .map(|c| if matches!(c, 'é' | 'è' | 'ê') { 'e' } else { c })
            .collect()
    }
}

/// Which matcher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Semantic,
    Keyword,
}

/// An entry paired with its semantic relevance, as produced by a semantic matcher.
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub entry: Arc<Entry>,
    pub score: f32,
}

/// What consumers render: the entry plus its provenance.
///
/// `search_type` and `similarity_score` are both `None` for tag-only browsing,
/// where no search ran.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub entry: Arc<Entry>,
    #[serde(rename = "searchType", skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(rename = "similarityScore", skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f32>,
}

impl SearchResult {
    pub fn browse(entry: Arc<Entry>) -> Self {
        Self { entry, search_type: None, similarity_score: None }
    }

    pub fn semantic(hit: ScoredEntry) -> Self {
        Self { entry: hit.entry, search_type: Some(SearchType::Semantic), similarity_score: Some(hit.score) }
    }

    pub fn keyword(entry: Arc<Entry>, score: f32) -> Self {
        Self { entry, search_type: Some(SearchType::Keyword), similarity_score: Some(score) }
    }

    pub fn id(&self) -> &EntryId {
        &self.entry.id
    }
}
