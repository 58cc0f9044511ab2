use std::fs;
use std::path::Path;

use tracing::info;

use super::tables::{
    read_backgrounds, read_packs, read_songs, write_backgrounds, write_packs, write_songs,
};
use crate::chart::{BackgroundRecord, PackRecord, SongRecord};
use crate::config::data::{BACKGROUND_FILE, PACK_FILE, SONG_FILE};
use crate::error::Result;

/// The song, pack and background tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub songs: Vec<SongRecord>,
    pub packs: Vec<PackRecord>,
    pub backgrounds: Vec<BackgroundRecord>,
}

impl Dataset {
    /// Assemble a dataset; songs are ordered by title length.
    pub fn new(
        songs: Vec<SongRecord>,
        packs: Vec<PackRecord>,
        backgrounds: Vec<BackgroundRecord>,
    ) -> Self {
        let mut dataset = Self {
            songs,
            packs,
            backgrounds,
        };
        dataset.sort_songs();
        dataset
    }

    /// Load the three tables from a directory
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let dataset = Self::new(
            read_songs(dir.join(SONG_FILE))?,
            read_packs(dir.join(PACK_FILE))?,
            read_backgrounds(dir.join(BACKGROUND_FILE))?,
        );
        info!(
            "Loaded {} charts, {} packs, {} backgrounds from {}",
            dataset.songs.len(),
            dataset.packs.len(),
            dataset.backgrounds.len(),
            dir.display()
        );
        Ok(dataset)
    }

    /// Write the three tables into a directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        write_songs(dir.join(SONG_FILE), &self.songs)?;
        write_packs(dir.join(PACK_FILE), &self.packs)?;
        write_backgrounds(dir.join(BACKGROUND_FILE), &self.backgrounds)?;
        info!("Saved dataset to {}", dir.display());
        Ok(())
    }

    /// Shorter titles first; ties keep their scraped order.
    pub fn sort_songs(&mut self) {
        self.songs.sort_by_key(|song| song.title.chars().count());
    }

    /// Every chart row of a song
    pub fn songs_by_id<'a, 'b>(
        &'a self,
        id: &'b str,
    ) -> impl Iterator<Item = &'a SongRecord> + use<'a, 'b> {
        self.songs.iter().filter(move |song| song.id == id)
    }

    pub fn contains_song(&self, id: &str) -> bool {
        self.songs.iter().any(|song| song.id == id)
    }

    pub fn pack_image(&self, pack: &str) -> Option<&str> {
        self.packs
            .iter()
            .find(|p| p.pack == pack)
            .map(|p| p.image.as_str())
    }

    pub fn background_image(&self, background: &str) -> Option<&str> {
        self.backgrounds
            .iter()
            .find(|b| b.background == background)
            .map(|b| b.image.as_str())
    }
}
