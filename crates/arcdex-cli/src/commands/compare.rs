//! Compare command: rank a chart within its group.

use std::path::Path;

use anyhow::Result;
use arcdex_core::export::format_compare_console;
use arcdex_core::{CompareGroup, CompareMetric, Platform, SongView, compare, resolve_song};

use super::{load_dataset, select_difficulty};

pub fn run(
    data_dir: &Path,
    query: &str,
    difficulty: Option<&str>,
    platform: Platform,
    group: CompareGroup,
    metric: CompareMetric,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(data_dir)?;
    let id = resolve_song(&dataset, query)?;
    let difficulty = select_difficulty(&SongView::new(&dataset, &id)?, difficulty)?;
    let report = compare(&dataset, &id, difficulty, group, metric, platform)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_compare_console(&report));
    }
    Ok(())
}
