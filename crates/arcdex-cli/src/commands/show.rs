//! Show command: one chart's song card.

use std::path::Path;

use anyhow::Result;
use arcdex_core::export::format_chart_card_console;
use arcdex_core::{Platform, SongView, resolve_song};

use super::{load_dataset, select_difficulty};

pub fn run(
    data_dir: &Path,
    query: &str,
    difficulty: Option<&str>,
    platform: Platform,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(data_dir)?;
    let id = resolve_song(&dataset, query)?;
    let view = SongView::new(&dataset, &id)?;
    let difficulty = select_difficulty(&view, difficulty)?;
    let card = view.chart(difficulty, platform)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{}", format_chart_card_console(&card));
    }
    Ok(())
}
