//! Wiki scraping.
//!
//! This module contains:
//! - `Scraper` - runs the page-by-page pipeline over a `PageSource`
//! - page parsers for the song index, song pages, pack pages and backgrounds
//! - `normalize_chart` and the Beyond `VariantSplit` rules

pub mod backgrounds;
pub mod html;
pub mod packs;
pub mod rows;
pub mod song_list;
pub mod song_page;
pub mod variant;

use std::collections::HashMap;

use tracing::{debug, info};

pub use backgrounds::parse_backgrounds;
pub use packs::{distinct_packs, pack_page_title, pack_record, parse_pack_image};
pub use rows::normalize_chart;
pub use song_list::parse_song_list;
pub use song_page::{InfoField, RawChart, parse_song_page};
pub use variant::{VARIANT_SPLITS, VariantSplit, split_variants};

use crate::chart::{BackgroundRecord, PackRecord, SongRecord};
use crate::config::wiki::{BACKGROUND_PAGE, SONG_INDEX_PAGE};
use crate::error::Result;
use crate::network::PageSource;
use crate::storage::Dataset;

/// Scrapes the three tables from a wiki.
pub struct Scraper<S: PageSource> {
    source: S,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Every song page title listed on the index page.
    pub fn song_titles(&self) -> Result<Vec<String>> {
        let html = self.source.fetch(SONG_INDEX_PAGE)?;
        let titles = parse_song_list(&html)?;
        info!("Found {} songs", titles.len());
        Ok(titles)
    }

    /// All chart rows of one song page, normalized.
    pub fn song(&self, title: &str) -> Result<Vec<SongRecord>> {
        let html = self.source.fetch(title)?;
        let charts = parse_song_page(&html, title)?;
        debug!("{}: {} charts", title, charts.len());
        Ok(charts.iter().map(normalize_chart).collect())
    }

    /// The song table: every listed song, variants split.
    pub fn songs(&self) -> Result<Vec<SongRecord>> {
        let titles = self.song_titles()?;
        let total = titles.len();

        let mut songs = Vec::new();
        for (index, title) in titles.iter().enumerate() {
            info!("Current page: {} ({}/{})", title, index + 1, total);
            songs.extend(self.song(title)?);
        }

        split_variants(&mut songs);
        info!("Scraped {} charts", songs.len());
        Ok(songs)
    }

    /// The pack table for the packs named in `songs`.
    ///
    /// Pack pages shared by several packs are fetched once.
    pub fn packs(&self, songs: &[SongRecord]) -> Result<Vec<PackRecord>> {
        let pack_names = distinct_packs(songs);
        let total = pack_names.len();

        let mut images: HashMap<&str, String> = HashMap::new();
        let mut packs = Vec::with_capacity(total);
        for (index, pack) in pack_names.into_iter().enumerate() {
            let page = pack_page_title(pack);
            info!("Current page: {} ({}/{})", page, index + 1, total);

            let image = match images.get(page) {
                Some(image) => image.clone(),
                None => {
                    let image = parse_pack_image(&self.source.fetch(page)?, page)?;
                    images.insert(page, image.clone());
                    image
                }
            };
            packs.push(pack_record(pack, image));
        }
        Ok(packs)
    }

    /// The background table.
    pub fn backgrounds(&self) -> Result<Vec<BackgroundRecord>> {
        info!("Current page: {}", BACKGROUND_PAGE);
        let html = self.source.fetch(BACKGROUND_PAGE)?;
        let backgrounds = parse_backgrounds(&html)?;
        info!("Found {} backgrounds", backgrounds.len());
        Ok(backgrounds)
    }

    /// Run every stage.
    pub fn run(&self) -> Result<Dataset> {
        let songs = self.songs()?;
        let packs = self.packs(&songs)?;
        let backgrounds = self.backgrounds()?;
        Ok(Dataset::new(songs, packs, backgrounds))
    }
}
