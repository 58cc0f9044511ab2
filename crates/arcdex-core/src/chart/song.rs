use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chart::{Difficulty, GameVersion, Length, Level, Platform};

/// One chart of one song: a row of the song table.
///
/// Field order is the column order of `song_data.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Pack")]
    pub pack: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Vocals")]
    pub vocals: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Side")]
    pub side: Option<String>,
    #[serde(rename = "Background")]
    pub background: Option<String>,
    #[serde(rename = "Artwork")]
    pub artwork: Option<String>,
    /// Artwork image URL
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,
    #[serde(rename = "Level")]
    pub level: Option<Level>,
    #[serde(rename = "Chart Constant")]
    pub chart_constant: Option<f32>,
    #[serde(rename = "Length")]
    pub length: Option<Length>,
    #[serde(rename = "Chart Design")]
    pub chart_design: Option<String>,
    #[serde(rename = "Notes_Touch")]
    pub notes_touch: Option<u32>,
    #[serde(rename = "Notes_Joycon")]
    pub notes_joycon: Option<u32>,
    #[serde(rename = "Version_Mobile")]
    pub version_mobile: Option<GameVersion>,
    #[serde(rename = "Version_Switch")]
    pub version_switch: Option<GameVersion>,
    #[serde(rename = "Added_Mobile")]
    pub added_mobile: Option<NaiveDate>,
    #[serde(rename = "Added_Switch")]
    pub added_switch: Option<NaiveDate>,
    #[serde(rename = "BPM_Min")]
    pub bpm_min: Option<f32>,
    #[serde(rename = "BPM_Max")]
    pub bpm_max: Option<f32>,
}

impl SongRecord {
    /// Create a record with only the identifying columns filled
    pub fn new(id: &str, title: &str, pack: &str, artist: &str, difficulty: Difficulty) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            pack: pack.to_string(),
            artist: artist.to_string(),
            vocals: None,
            genre: None,
            side: None,
            background: None,
            artwork: None,
            image: String::new(),
            difficulty,
            level: None,
            chart_constant: None,
            length: None,
            chart_design: None,
            notes_touch: None,
            notes_joycon: None,
            version_mobile: None,
            version_switch: None,
            added_mobile: None,
            added_switch: None,
            bpm_min: None,
            bpm_max: None,
        }
    }

    /// Note count on the given platform (touch on mobile, Joy-Con on Switch)
    pub fn notes(&self, platform: Platform) -> Option<u32> {
        match platform {
            Platform::Mobile => self.notes_touch,
            Platform::Switch => self.notes_joycon,
        }
    }

    pub fn version(&self, platform: Platform) -> Option<GameVersion> {
        match platform {
            Platform::Mobile => self.version_mobile,
            Platform::Switch => self.version_switch,
        }
    }

    pub fn added(&self, platform: Platform) -> Option<NaiveDate> {
        match platform {
            Platform::Mobile => self.added_mobile,
            Platform::Switch => self.added_switch,
        }
    }

    /// A chart without a note count on a platform is not playable there
    pub fn is_available(&self, platform: Platform) -> bool {
        self.notes(platform).is_some()
    }

    /// `"180"` for a fixed tempo, `"100-200"` for a range
    pub fn bpm_display(&self) -> Option<String> {
        let min = self.bpm_min?;
        let max = self.bpm_max.unwrap_or(min);
        if min == max {
            Some(format_number(min))
        } else {
            Some(format!("{}-{}", format_number(min), format_number(max)))
        }
    }
}

/// Print whole numbers without a fractional part
pub fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_record() -> SongRecord {
        let mut record = SongRecord::new(
            "tempestissimo",
            "Tempestissimo",
            "Vicious Labyrinth",
            "t+pazolite",
            Difficulty::Future,
        );
        record.notes_touch = Some(1540);
        record.bpm_min = Some(231.0);
        record.bpm_max = Some(231.0);
        record.version_mobile = Some(GameVersion::new(3, 0, 0));
        record
    }

    #[test]
    fn test_notes_by_platform() {
        let record = make_test_record();
        assert_eq!(record.notes(Platform::Mobile), Some(1540));
        assert_eq!(record.notes(Platform::Switch), None);
        assert!(record.is_available(Platform::Mobile));
        assert!(!record.is_available(Platform::Switch));
    }

    #[test]
    fn test_bpm_display() {
        let mut record = make_test_record();
        assert_eq!(record.bpm_display().as_deref(), Some("231"));

        record.bpm_min = Some(100.0);
        record.bpm_max = Some(200.0);
        assert_eq!(record.bpm_display().as_deref(), Some("100-200"));

        record.bpm_min = Some(87.5);
        record.bpm_max = None;
        assert_eq!(record.bpm_display().as_deref(), Some("87.5"));

        record.bpm_min = None;
        assert_eq!(record.bpm_display(), None);
    }
}
