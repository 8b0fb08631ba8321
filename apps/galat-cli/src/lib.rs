//! Shared plumbing for the galat binaries: logging, dataset bootstrap and
//! plain-text rendering of result cards.
pub mod render;

use std::sync::Arc;

use anyhow::Context;
use galat_core::config::{expand_path, Config, SearchSettings};
use galat_core::Dataset;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber; `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

/// Loads configuration and the dataset, honouring an explicit dataset path.
pub fn bootstrap(dataset_override: Option<&str>) -> anyhow::Result<(SearchSettings, Arc<Dataset>)> {
    let config = Config::load().context("loading configuration")?;
    let settings = config.search()?;
    let path = match dataset_override {
        Some(p) => expand_path(p),
        None => config.dataset_path()?,
    };
    let dataset = Dataset::from_path(&path).with_context(|| format!("loading dataset from {}", path.display()))?;
    Ok((settings, Arc::new(dataset)))
}
