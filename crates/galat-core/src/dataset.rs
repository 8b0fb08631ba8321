//! Dataset provider: loads the curated entries once and hands out read-only views.
//!
//! Two on-disk shapes are accepted: a bare JSON array of entries, or an object
//! `{ "tags": [...], "entries": [...] }`. Validation happens here and nowhere
//! else; after load every entry is well-typed and ids are unique.
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Entry, EntryId};

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Bare(Vec<Value>),
    Full {
        #[serde(default)]
        tags: Option<Vec<String>>,
        entries: Vec<Value>,
    },
}

/// The immutable entry collection plus its closed tag set.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<Arc<Entry>>,
    tags: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from already-typed entries, deriving the tag set.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        Self::with_tags(entries, None)
    }

    /// Builds a dataset with an explicit tag set. `None` derives it from the
    /// entries in first-appearance order.
    pub fn with_tags(entries: Vec<Entry>, tags: Option<Vec<String>>) -> Result<Self> {
        let mut seen: HashSet<EntryId> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(Error::InvalidDataset(format!("duplicate entry id '{}'", entry.id)));
            }
        }
        let tags = tags.unwrap_or_else(|| derive_tags(&entries));
        Ok(Self { entries: entries.into_iter().map(Arc::new).collect(), tags })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let (raw_entries, tags) = match serde_json::from_str::<DatasetFile>(json)? {
            DatasetFile::Bare(entries) => (entries, None),
            DatasetFile::Full { tags, entries } => (entries, tags),
        };
        let mut entries = Vec::with_capacity(raw_entries.len());
        for (position, raw) in raw_entries.into_iter().enumerate() {
            if !raw.is_object() {
                return Err(Error::InvalidDataset(format!("entry #{position} is not an object")));
            }
            let entry: Entry = serde_json::from_value(raw)
                .map_err(|e| Error::InvalidDataset(format!("entry #{position}: {e}")))?;
            entries.push(entry);
        }
        debug!(entries = entries.len(), explicit_tags = tags.is_some(), "parsed dataset");
        Self::with_tags(entries, tags)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.display().to_string(), source })?;
        let dataset = Self::from_json_str(&json)?;
        info!(path = %path.display(), entries = dataset.len(), tags = dataset.tags.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn get(&self, id: &EntryId) -> Option<&Arc<Entry>> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn derive_tags(entries: &[Entry]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for entry in entries {
        if !entry.tag.trim().is_empty() && !tags.contains(&entry.tag) {
            tags.push(entry.tag.clone());
        }
    }
    tags
}
