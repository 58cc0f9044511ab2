//! Scrape command: fetch the wiki and write the CSV tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arcdex_core::config::data::{BACKGROUND_FILE, PACK_FILE, SONG_FILE};
use arcdex_core::storage::{read_songs, write_backgrounds, write_packs, write_songs};
use arcdex_core::{Config, HttpPageSource, Scraper};
use tracing::info;

use crate::cli::ScrapeStage;

pub fn run(
    mut config: Config,
    data_dir: &Path,
    only: &[ScrapeStage],
    wiki: Option<String>,
    retries: Option<u32>,
) -> Result<()> {
    if let Some(wiki) = wiki {
        config.scrape.wiki = wiki;
    }
    if let Some(retries) = retries {
        config.scrape.attempts = retries.max(1);
    }
    let wants = |stage: ScrapeStage| only.is_empty() || only.contains(&stage);

    eprintln!(
        "arcdex {} - scraping {}.fandom.com",
        env!("CARGO_PKG_VERSION"),
        config.scrape.wiki
    );
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let scraper = Scraper::new(HttpPageSource::new(&config.scrape));

    let songs = if wants(ScrapeStage::Songs) {
        let songs = scraper.songs()?;
        write_songs(data_dir.join(SONG_FILE), &songs)?;
        eprintln!("Wrote {} charts to {}", songs.len(), SONG_FILE);
        Some(songs)
    } else {
        None
    };

    if wants(ScrapeStage::Packs) {
        // Pack names come from the song table; reuse the saved one when songs were skipped
        let songs = match songs {
            Some(songs) => songs,
            None => {
                info!("Reading packs from existing {}", SONG_FILE);
                read_songs(data_dir.join(SONG_FILE)).with_context(|| {
                    format!("Scraping packs needs {} (scrape songs first)", SONG_FILE)
                })?
            }
        };
        let packs = scraper.packs(&songs)?;
        write_packs(data_dir.join(PACK_FILE), &packs)?;
        eprintln!("Wrote {} packs to {}", packs.len(), PACK_FILE);
    }

    if wants(ScrapeStage::Backgrounds) {
        let backgrounds = scraper.backgrounds()?;
        write_backgrounds(data_dir.join(BACKGROUND_FILE), &backgrounds)?;
        eprintln!("Wrote {} backgrounds to {}", backgrounds.len(), BACKGROUND_FILE);
    }

    eprintln!("Saved to: {}", data_dir.display());
    Ok(())
}
