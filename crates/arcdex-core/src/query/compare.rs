use std::cmp::Ordering;

use serde::Serialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::chart::{Difficulty, Length, Platform, SongRecord, format_number};
use crate::error::{Error, Result};
use crate::storage::Dataset;

/// Which charts a chart is compared against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CompareGroup {
    /// Same difficulty tier
    #[default]
    Difficulty,
    /// Same level (9 and 9+ are different groups)
    Level,
    Pack,
}

/// The value charts are ranked by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CompareMetric {
    #[default]
    #[strum(to_string = "Chart Constant", serialize = "chart-constant")]
    ChartConstant,
    Notes,
    #[strum(to_string = "Minimum BPM", serialize = "min-bpm")]
    MinBpm,
    #[strum(to_string = "Maximum BPM", serialize = "max-bpm")]
    MaxBpm,
    Length,
}

impl CompareGroup {
    fn same_group(self, a: &SongRecord, b: &SongRecord) -> bool {
        match self {
            Self::Difficulty => a.difficulty == b.difficulty,
            Self::Level => a.level == b.level,
            Self::Pack => a.pack == b.pack,
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl CompareMetric {
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Metric value of a row; notes follow the platform
    pub fn value(self, row: &SongRecord, platform: Platform) -> Option<f64> {
        match self {
            Self::ChartConstant => row.chart_constant.map(f64::from),
            Self::Notes => row.notes(platform).map(f64::from),
            Self::MinBpm => row.bpm_min.map(f64::from),
            Self::MaxBpm => row.bpm_max.map(f64::from),
            Self::Length => row.length.map(|l| f64::from(l.as_secs())),
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            Self::Length => Length::from_secs(value as u32).to_string(),
            _ => format_number(value as f32),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareEntry {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub value: Option<f64>,
}

/// A chart's position within its group, highest value first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareReport {
    pub group: CompareGroup,
    pub metric: CompareMetric,
    pub platform: Platform,
    /// Ranked entries; charts without a value come last
    pub entries: Vec<CompareEntry>,
    /// Index of the selected chart in `entries`
    pub rank: usize,
    /// Entries that have a value
    pub count: usize,
    pub value: Option<f64>,
}

impl CompareReport {
    /// `rank * 100 / count`; absent when the chart has no value.
    pub fn top_percent(&self) -> Option<f64> {
        if self.value.is_none() || self.count == 0 {
            return None;
        }
        Some(self.rank as f64 * 100.0 / self.count as f64)
    }

    pub fn label(&self) -> Option<String> {
        self.top_percent().map(|p| format!("Top {:.1}%", p))
    }
}

/// Rank the chart `(id, difficulty)` against the charts sharing its group.
pub fn compare(
    dataset: &Dataset,
    id: &str,
    difficulty: Difficulty,
    group: CompareGroup,
    metric: CompareMetric,
    platform: Platform,
) -> Result<CompareReport> {
    let selected = dataset
        .songs_by_id(id)
        .find(|row| row.difficulty == difficulty)
        .ok_or_else(|| {
            if dataset.contains_song(id) {
                Error::UnknownDifficulty(format!("{} for {}", difficulty, id))
            } else {
                Error::UnknownSong(id.to_string())
            }
        })?;

    let mut rows: Vec<&SongRecord> = dataset
        .songs
        .iter()
        .filter(|row| group.same_group(row, selected))
        .collect();
    rows.sort_by(|a, b| descending(metric.value(a, platform), metric.value(b, platform)));

    let rank = rows
        .iter()
        .position(|row| std::ptr::eq(*row, selected))
        .unwrap_or_default();
    let entries: Vec<CompareEntry> = rows
        .iter()
        .map(|row| CompareEntry {
            id: row.id.clone(),
            title: row.title.clone(),
            difficulty: row.difficulty,
            value: metric.value(row, platform),
        })
        .collect();
    let count = entries.iter().filter(|e| e.value.is_some()).count();

    Ok(CompareReport {
        group,
        metric,
        platform,
        entries,
        rank,
        count,
        value: metric.value(selected, platform),
    })
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Level;

    fn chart(
        id: &str,
        difficulty: Difficulty,
        constant: Option<f32>,
        notes: Option<u32>,
    ) -> SongRecord {
        let mut record = SongRecord::new(id, &id.to_uppercase(), "Pack", "Artist", difficulty);
        record.chart_constant = constant;
        record.notes_touch = notes;
        record.level = constant.map(|c| Level::new(c as u8, false));
        record
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                chart("a", Difficulty::Future, Some(9.0), Some(900)),
                chart("b", Difficulty::Future, Some(10.5), Some(1100)),
                chart("c", Difficulty::Future, None, Some(800)),
                chart("d", Difficulty::Future, Some(9.5), None),
                chart("e", Difficulty::Future, Some(8.0), Some(700)),
                chart("a", Difficulty::Past, Some(3.0), Some(300)),
            ],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_compare_by_difficulty() {
        let dataset = dataset();
        let report = compare(
            &dataset,
            "a",
            Difficulty::Future,
            CompareGroup::Difficulty,
            CompareMetric::ChartConstant,
            Platform::Mobile,
        )
        .unwrap();

        let order: Vec<&str> = report.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "e", "c"]);
        assert_eq!(report.rank, 2);
        assert_eq!(report.count, 4);
        assert_eq!(report.top_percent(), Some(50.0));
        assert_eq!(report.label().as_deref(), Some("Top 50.0%"));
    }

    #[test]
    fn test_compare_top_chart() {
        let dataset = dataset();
        let report = compare(
            &dataset,
            "b",
            Difficulty::Future,
            CompareGroup::Difficulty,
            CompareMetric::Notes,
            Platform::Mobile,
        )
        .unwrap();
        assert_eq!(report.rank, 0);
        assert_eq!(report.top_percent(), Some(0.0));
    }

    #[test]
    fn test_compare_missing_value_has_no_percent() {
        let dataset = dataset();
        let report = compare(
            &dataset,
            "c",
            Difficulty::Future,
            CompareGroup::Difficulty,
            CompareMetric::ChartConstant,
            Platform::Mobile,
        )
        .unwrap();
        assert_eq!(report.rank, 4);
        assert_eq!(report.top_percent(), None);
    }

    #[test]
    fn test_compare_switch_notes_all_absent() {
        let dataset = dataset();
        let report = compare(
            &dataset,
            "a",
            Difficulty::Past,
            CompareGroup::Pack,
            CompareMetric::Notes,
            Platform::Switch,
        )
        .unwrap();
        assert_eq!(report.entries.len(), 6);
        assert_eq!(report.count, 0);
        assert_eq!(report.top_percent(), None);
    }

    #[test]
    fn test_compare_unknown_chart() {
        let dataset = dataset();
        let unknown_song = compare(
            &dataset,
            "zzz",
            Difficulty::Future,
            CompareGroup::Level,
            CompareMetric::Length,
            Platform::Mobile,
        );
        assert!(matches!(unknown_song, Err(Error::UnknownSong(_))));

        let unknown_difficulty = compare(
            &dataset,
            "a",
            Difficulty::Beyond,
            CompareGroup::Level,
            CompareMetric::Length,
            Platform::Mobile,
        );
        assert!(matches!(unknown_difficulty, Err(Error::UnknownDifficulty(_))));
    }

    #[test]
    fn test_metric_parse_and_format() {
        assert_eq!(
            "chart-constant".parse::<CompareMetric>().unwrap(),
            CompareMetric::ChartConstant
        );
        assert_eq!("MAX-BPM".parse::<CompareMetric>().unwrap(), CompareMetric::MaxBpm);
        assert_eq!("pack".parse::<CompareGroup>().unwrap(), CompareGroup::Pack);
        assert_eq!(CompareMetric::Length.format(125.0), "2:05");
        assert_eq!(CompareMetric::ChartConstant.format(10.5), "10.5");
    }
}
