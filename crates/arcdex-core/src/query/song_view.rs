use serde::Serialize;

use crate::chart::{Difficulty, Platform, SongRecord, format_number};
use crate::error::{Error, Result};
use crate::storage::Dataset;

/// Shown for credits the wiki leaves blank.
pub const NONE_LABEL: &str = "(None)";

/// All charts of one song.
#[derive(Debug, Clone)]
pub struct SongView<'a> {
    dataset: &'a Dataset,
    rows: Vec<&'a SongRecord>,
}

impl<'a> SongView<'a> {
    pub fn new(dataset: &'a Dataset, id: &str) -> Result<Self> {
        let rows: Vec<&SongRecord> = dataset.songs_by_id(id).collect();
        if rows.is_empty() {
            return Err(Error::UnknownSong(id.to_string()));
        }
        Ok(Self { dataset, rows })
    }

    pub fn title(&self) -> &str {
        &self.rows[0].title
    }

    /// Charted difficulties, lowest first
    pub fn difficulties(&self) -> Vec<Difficulty> {
        let mut difficulties: Vec<Difficulty> = self.rows.iter().map(|r| r.difficulty).collect();
        difficulties.sort();
        difficulties.dedup();
        difficulties
    }

    pub fn row(&self, difficulty: Difficulty) -> Result<&'a SongRecord> {
        self.rows
            .iter()
            .find(|r| r.difficulty == difficulty)
            .copied()
            .ok_or_else(|| Error::UnknownDifficulty(format!("{} for {}", difficulty, self.title())))
    }

    /// The song card for one chart on one platform.
    pub fn chart(&self, difficulty: Difficulty, platform: Platform) -> Result<ChartCard> {
        let row = self.row(difficulty)?;
        Ok(ChartCard::new(row, platform, self.dataset))
    }
}

/// Everything the song card shows for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartCard {
    pub id: String,
    pub title: String,
    pub pack: String,
    pub artist: String,
    pub vocals: String,
    pub genre: Option<String>,
    pub side: Option<String>,
    pub difficulty: Difficulty,
    pub platform: Platform,
    /// `false` when the chart has no note count on this platform
    pub available: bool,
    pub level: Option<String>,
    pub notes: Option<u32>,
    pub chart_constant: Option<String>,
    pub bpm: Option<String>,
    pub length: Option<String>,
    pub version: Option<String>,
    pub added: Option<String>,
    pub chart_design: Option<String>,
    pub artwork: String,
    pub image: String,
    pub pack_image: Option<String>,
    pub background: Option<String>,
    pub background_image: Option<String>,
}

impl ChartCard {
    pub fn new(row: &SongRecord, platform: Platform, dataset: &Dataset) -> Self {
        let background_image = row
            .background
            .as_deref()
            .and_then(|bg| dataset.background_image(bg))
            .map(str::to_string);

        Self {
            id: row.id.clone(),
            title: row.title.clone(),
            pack: row.pack.clone(),
            artist: row.artist.clone(),
            vocals: row.vocals.clone().unwrap_or_else(|| NONE_LABEL.to_string()),
            genre: row.genre.clone(),
            side: row.side.clone(),
            difficulty: row.difficulty,
            platform,
            available: row.is_available(platform),
            level: row.level.map(|l| l.to_string()),
            notes: row.notes(platform),
            chart_constant: row.chart_constant.map(format_number),
            bpm: row.bpm_display(),
            length: row.length.map(|l| l.mm_ss()),
            version: row.version(platform).map(|v| v.to_string()),
            added: row.added(platform).map(|d| d.to_string()),
            chart_design: row.chart_design.clone(),
            artwork: row.artwork.clone().unwrap_or_else(|| NONE_LABEL.to_string()),
            image: row.image.clone(),
            pack_image: dataset.pack_image(&row.pack).map(str::to_string),
            background: row.background.clone(),
            background_image,
        }
    }

    /// Notice printed instead of the chart details
    pub fn unavailable_message(&self) -> Option<String> {
        (!self.available)
            .then(|| format!("This chart is not available in {} version.", self.platform))
    }
}
