use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Tunables of the search pipeline, read from the `search` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period before a typed query is committed.
    pub debounce_ms: u64,
    /// Semantic hits scoring below this are dropped entirely.
    pub semantic_threshold: f32,
    /// Fixed score given to keyword-only hits.
    pub keyword_score: f32,
    /// Shorter terms are ignored by the semantic matcher.
    pub min_term_len: usize,
    /// Minimum shared prefix for two distinct terms to count as one root.
    pub root_min_len: usize,
    /// Share of the shorter term the common prefix must cover.
    pub root_ratio: f32,
    /// Discount applied to a root match relative to an exact one.
    pub root_weight: f32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            semantic_threshold: 0.3,
            keyword_score: 0.05,
            min_term_len: 3,
            root_min_len: 3,
            root_ratio: 0.6,
            root_weight: 0.8,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(Error::InvalidConfig(msg));
        if self.debounce_ms == 0 {
            return bad("search.debounce_ms must be positive".into());
        }
        if !(self.semantic_threshold > 0.0 && self.semantic_threshold <= 1.0) {
            return bad(format!("search.semantic_threshold must be in (0, 1], got {}", self.semantic_threshold));
        }
        if !(0.0..1.0).contains(&self.keyword_score) {
            return bad(format!("search.keyword_score must be in [0, 1), got {}", self.keyword_score));
        }
        if !(self.root_ratio > 0.0 && self.root_ratio <= 1.0) {
            return bad(format!("search.root_ratio must be in (0, 1], got {}", self.root_ratio));
        }
        if !(self.root_weight > 0.0 && self.root_weight < 1.0) {
            return bad(format!("search.root_weight must be in (0, 1), got {}", self.root_weight));
        }
        if self.min_term_len == 0 || self.root_min_len == 0 {
            return bad("search.min_term_len and search.root_min_len must be positive".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dataset_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { dataset_path: "data/galat.json".to_string() }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new()
            .merge(Serialized::defaults(SearchSettings::default()).key("search"))
            .merge(Serialized::defaults(DataSettings::default()).key("data"))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.search()?;
        Ok(config)
    }

    /// Wraps an already-assembled figment, for callers that pick their own sources.
    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    /// The `search` table, defaults filled in, validated.
    pub fn search(&self) -> Result<SearchSettings> {
        let settings = if self.figment.find_value("search").is_ok() {
            self.get::<SearchSettings>("search")?
        } else {
            SearchSettings::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn data(&self) -> Result<DataSettings> {
        if self.figment.find_value("data").is_ok() {
            self.get("data")
        } else {
            Ok(DataSettings::default())
        }
    }

    /// Dataset location with `~` and environment variables expanded.
    pub fn dataset_path(&self) -> Result<PathBuf> {
        Ok(expand_path(self.data()?.dataset_path))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
