//! CLI subcommand implementations.

pub mod compare;
pub mod scrape;
pub mod search;
pub mod show;
pub mod table;

use std::path::Path;

use anyhow::{Context, Result};
use arcdex_core::{Config, Dataset, Difficulty, SongView, parse_difficulty};
use tracing::{info, warn};

/// Resolve the configuration: an explicit file, else the default path, else defaults.
///
/// A file that cannot be read or parsed is reported and ignored.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match Config::default_path() {
            Some(path) if path.exists() => path,
            _ => return Config::default(),
        },
    };

    match Config::load(&path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub(crate) fn load_dataset(data_dir: &Path) -> Result<Dataset> {
    Dataset::load(data_dir).with_context(|| {
        format!(
            "Failed to load dataset from {} (run `arcdex scrape` first)",
            data_dir.display()
        )
    })
}

/// The requested difficulty, or the song's lowest one
pub(crate) fn select_difficulty(view: &SongView<'_>, input: Option<&str>) -> Result<Difficulty> {
    match input {
        Some(input) => Ok(parse_difficulty(input)?),
        None => view
            .difficulties()
            .first()
            .copied()
            .with_context(|| format!("{} has no charts", view.title())),
    }
}
