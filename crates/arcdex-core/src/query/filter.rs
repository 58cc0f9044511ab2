use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::chart::{
    Difficulty, GameVersion, Length, Level, SongRecord, format_number, parse_difficulty,
};
use crate::error::{Error, Result};

/// A column of the song table. Parses from the CSV header or its
/// lowercase snake-case form (`bpm_max`, `chart_constant`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Column {
    #[strum(to_string = "ID")]
    Id,
    Title,
    Pack,
    Artist,
    Vocals,
    Genre,
    Side,
    Background,
    Artwork,
    Image,
    Difficulty,
    Level,
    #[strum(to_string = "Chart Constant", serialize = "chart_constant")]
    ChartConstant,
    Length,
    #[strum(to_string = "Chart Design", serialize = "chart_design")]
    ChartDesign,
    #[strum(to_string = "Notes_Touch")]
    NotesTouch,
    #[strum(to_string = "Notes_Joycon")]
    NotesJoycon,
    #[strum(to_string = "Version_Mobile")]
    VersionMobile,
    #[strum(to_string = "Version_Switch")]
    VersionSwitch,
    #[strum(to_string = "Added_Mobile")]
    AddedMobile,
    #[strum(to_string = "Added_Switch")]
    AddedSwitch,
    #[strum(to_string = "BPM_Min")]
    BpmMin,
    #[strum(to_string = "BPM_Max")]
    BpmMax,
}

impl Column {
    pub fn header(self) -> &'static str {
        self.into()
    }

    /// Every column in CSV order
    pub fn all() -> impl Iterator<Item = Column> {
        Column::iter()
    }

    /// Display text of a cell; levels print as `9+`, difficulties by short name.
    pub fn text(self, row: &SongRecord) -> Option<String> {
        fn show<T: Display>(value: Option<T>) -> Option<String> {
            value.map(|v| v.to_string())
        }

        match self {
            Self::Id => Some(row.id.clone()),
            Self::Title => Some(row.title.clone()),
            Self::Pack => Some(row.pack.clone()),
            Self::Artist => Some(row.artist.clone()),
            Self::Vocals => row.vocals.clone(),
            Self::Genre => row.genre.clone(),
            Self::Side => row.side.clone(),
            Self::Background => row.background.clone(),
            Self::Artwork => row.artwork.clone(),
            Self::Image => Some(row.image.clone()).filter(|s| !s.is_empty()),
            Self::Difficulty => Some(row.difficulty.to_string()),
            Self::Level => show(row.level),
            Self::ChartConstant => row.chart_constant.map(format_number),
            Self::Length => show(row.length),
            Self::ChartDesign => row.chart_design.clone(),
            Self::NotesTouch => show(row.notes_touch),
            Self::NotesJoycon => show(row.notes_joycon),
            Self::VersionMobile => show(row.version_mobile),
            Self::VersionSwitch => show(row.version_switch),
            Self::AddedMobile => show(row.added_mobile),
            Self::AddedSwitch => show(row.added_switch),
            Self::BpmMin => row.bpm_min.map(format_number),
            Self::BpmMax => row.bpm_max.map(format_number),
        }
    }

    fn number(self, row: &SongRecord) -> Option<f64> {
        match self {
            Self::ChartConstant => row.chart_constant.map(f64::from),
            Self::NotesTouch => row.notes_touch.map(f64::from),
            Self::NotesJoycon => row.notes_joycon.map(f64::from),
            Self::BpmMin => row.bpm_min.map(f64::from),
            Self::BpmMax => row.bpm_max.map(f64::from),
            _ => None,
        }
    }

    fn version(self, row: &SongRecord) -> Option<GameVersion> {
        match self {
            Self::VersionMobile => row.version_mobile,
            Self::VersionSwitch => row.version_switch,
            _ => None,
        }
    }

    fn date(self, row: &SongRecord) -> Option<NaiveDate> {
        match self {
            Self::AddedMobile => row.added_mobile,
            Self::AddedSwitch => row.added_switch,
            _ => None,
        }
    }
}

/// Inclusive range with optional open ends (`9..`, `..10+`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd> ValueRange<T> {
    /// Absent values never fall inside a range.
    pub fn contains(&self, value: Option<T>) -> bool {
        let Some(value) = value else {
            return false;
        };
        self.min.as_ref().is_none_or(|min| &value >= min)
            && self.max.as_ref().is_none_or(|max| &value <= max)
    }
}

impl<T: FromStr<Err = Error> + Clone> ValueRange<T> {
    /// `a..b`, `a..`, `..b`, or a single value `a` meaning `a..a`.
    fn parse(expr: &str, value: &str) -> Result<Self> {
        let bound = |s: &str| -> Result<Option<T>> {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some).map_err(|e: Error| invalid(expr, e))
            }
        };

        match value.split_once("..") {
            Some((min, max)) => Ok(Self {
                min: bound(min)?,
                max: bound(max)?,
            }),
            None => {
                let exact = bound(value)?.ok_or_else(|| invalid(expr, "empty value"))?;
                Ok(Self {
                    min: Some(exact.clone()),
                    max: Some(exact),
                })
            }
        }
    }
}

/// One condition of the raw table view; filters combine with AND.
#[derive(Debug, Clone)]
pub enum Filter {
    Side(Vec<String>),
    Difficulty(Vec<Difficulty>),
    Level(ValueRange<Level>),
    Number {
        column: Column,
        range: ValueRange<f64>,
    },
    Version {
        column: Column,
        range: ValueRange<GameVersion>,
    },
    Length(ValueRange<Length>),
    Date {
        column: Column,
        range: ValueRange<NaiveDate>,
    },
    /// Case-insensitive regex over a column's display text
    Text {
        column: Column,
        pattern: Regex,
    },
}

impl Filter {
    pub fn matches(&self, row: &SongRecord) -> bool {
        match self {
            Self::Side(sides) => row
                .side
                .as_deref()
                .is_some_and(|side| sides.iter().any(|s| s.eq_ignore_ascii_case(side))),
            Self::Difficulty(difficulties) => difficulties.contains(&row.difficulty),
            Self::Level(range) => range.contains(row.level),
            Self::Number { column, range } => range.contains(column.number(row)),
            Self::Version { column, range } => range.contains(column.version(row)),
            Self::Length(range) => range.contains(row.length),
            Self::Date { column, range } => range.contains(column.date(row)),
            Self::Text { column, pattern } => column
                .text(row)
                .is_some_and(|text| pattern.is_match(&text)),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    /// `column=value` or `column~regex`.
    ///
    /// With `=`, categorical columns take a comma-separated set, range
    /// columns take `min..max` and text columns match a literal substring.
    fn from_str(expr: &str) -> Result<Self> {
        let split = expr
            .find(['=', '~'])
            .ok_or_else(|| invalid(expr, "expected column=value or column~pattern"))?;
        let (name, rest) = expr.split_at(split);
        let is_regex = rest.starts_with('~');
        let value = rest[1..].trim();

        let column: Column = name
            .trim()
            .parse()
            .map_err(|_| Error::UnknownColumn(name.trim().to_string()))?;

        if is_regex {
            return text_filter(expr, column, value);
        }

        let filter = match column {
            Column::Side => Filter::Side(split_list(value)),
            Column::Difficulty => Filter::Difficulty(
                split_list(value)
                    .iter()
                    .map(|d| parse_difficulty(d))
                    .collect::<Result<Vec<_>>>()
                    .map_err(|e| invalid(expr, e))?,
            ),
            Column::Level => Filter::Level(ValueRange::parse(expr, value)?),
            Column::Length => Filter::Length(ValueRange::parse(expr, value)?),
            Column::ChartConstant
            | Column::NotesTouch
            | Column::NotesJoycon
            | Column::BpmMin
            | Column::BpmMax => Filter::Number {
                column,
                range: number_range(expr, value)?,
            },
            Column::VersionMobile | Column::VersionSwitch => Filter::Version {
                column,
                range: ValueRange::parse(expr, value)?,
            },
            Column::AddedMobile | Column::AddedSwitch => Filter::Date {
                column,
                range: date_range(expr, value)?,
            },
            _ => text_filter(expr, column, &regex::escape(value))?,
        };
        Ok(filter)
    }
}

/// Rows satisfying every filter, in table order.
pub fn apply_filters<'a>(rows: &'a [SongRecord], filters: &[Filter]) -> Vec<&'a SongRecord> {
    rows.iter()
        .filter(|row| filters.iter().all(|f| f.matches(row)))
        .collect()
}

fn text_filter(expr: &str, column: Column, pattern: &str) -> Result<Filter> {
    let pattern = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| invalid(expr, e))?;
    Ok(Filter::Text { column, pattern })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn number_range(expr: &str, value: &str) -> Result<ValueRange<f64>> {
    let range: ValueRange<Parsed<f64>> = ValueRange::parse(expr, value)?;
    Ok(ValueRange {
        min: range.min.map(|p| p.0),
        max: range.max.map(|p| p.0),
    })
}

fn date_range(expr: &str, value: &str) -> Result<ValueRange<NaiveDate>> {
    let range: ValueRange<Parsed<NaiveDate>> = ValueRange::parse(expr, value)?;
    Ok(ValueRange {
        min: range.min.map(|p| p.0),
        max: range.max.map(|p| p.0),
    })
}

/// Adapts foreign `FromStr` errors for range parsing.
#[derive(Clone)]
struct Parsed<T>(T);

impl<T: FromStr> FromStr for Parsed<T>
where
    T::Err: Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(Parsed)
            .map_err(|e: T::Err| Error::InvalidField {
                field: "value",
                value: format!("{}: {}", s, e),
            })
    }
}

fn invalid(expr: &str, reason: impl Display) -> Error {
    Error::InvalidFilter {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, difficulty: Difficulty) -> SongRecord {
        SongRecord::new(id, &id.to_uppercase(), "Pack", "Camellia", difficulty)
    }

    fn rows() -> Vec<SongRecord> {
        let mut a = row("a", Difficulty::Future);
        a.level = Some(Level::new(9, true));
        a.bpm_max = Some(180.0);
        a.side = Some("Conflict".to_string());
        a.version_switch = Some(GameVersion::new(1, 5, 0));
        a.added_mobile = NaiveDate::from_ymd_opt(2020, 6, 1);
        a.length = Some(Length::from_secs(125));

        let mut b = row("b", Difficulty::Beyond);
        b.level = Some(Level::new(11, false));
        b.bpm_max = Some(220.0);
        b.side = Some("Light".to_string());
        b.artist = "Camellia feat. Nanahira".to_string();
        b.added_mobile = NaiveDate::from_ymd_opt(2022, 1, 1);

        let mut c = row("c", Difficulty::Past);
        c.level = Some(Level::new(4, false));
        c.artist = "Sakuzyo".to_string();

        vec![a, b, c]
    }

    fn ids(filters: &[Filter]) -> Vec<String> {
        apply_filters(&rows(), filters)
            .into_iter()
            .map(|r| r.id.clone())
            .collect()
    }

    fn parse(expr: &str) -> Filter {
        expr.parse().unwrap()
    }

    #[test]
    fn test_level_range() {
        assert_eq!(ids(&[parse("level=9..10+")]), vec!["a"]);
        assert_eq!(ids(&[parse("level=9+")]), vec!["a"]);
        assert_eq!(ids(&[parse("level=10..")]), vec!["b"]);
        assert_eq!(ids(&[parse("Level=..9")]), vec!["c"]);
    }

    #[test]
    fn test_number_range_skips_absent() {
        assert_eq!(ids(&[parse("bpm_max=150..200")]), vec!["a"]);
        assert_eq!(ids(&[parse("BPM_Max=0..1000")]), vec!["a", "b"]);
    }

    #[test]
    fn test_categorical() {
        assert_eq!(ids(&[parse("difficulty=FTR,BYD")]), vec!["a", "b"]);
        assert_eq!(ids(&[parse("difficulty=0")]), vec!["c"]);
        assert_eq!(ids(&[parse("side=light")]), vec!["b"]);
    }

    #[test]
    fn test_dates_versions_length() {
        assert_eq!(ids(&[parse("added_mobile=2020-01-01..2021-12-31")]), vec!["a"]);
        assert_eq!(ids(&[parse("version_switch=1.0.0..2.0.0")]), vec!["a"]);
        assert_eq!(ids(&[parse("length=1:30..2:30")]), vec!["a"]);
    }

    #[test]
    fn test_text_filters() {
        assert_eq!(ids(&[parse("artist~^Camellia")]), vec!["a", "b"]);
        assert_eq!(ids(&[parse("artist=nanahira")]), vec!["b"]);
        // `=` on text is literal
        assert!(ids(&[parse("artist=.*")]).is_empty());
        assert_eq!(ids(&[parse("level~\\+$")]), vec!["a"]);
    }

    #[test]
    fn test_filters_are_anded() {
        assert_eq!(
            ids(&[parse("artist~camellia"), parse("difficulty=BYD")]),
            vec!["b"]
        );
        assert_eq!(ids(&[]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_filters() {
        assert!(matches!("level".parse::<Filter>(), Err(Error::InvalidFilter { .. })));
        assert!(matches!("speed=1..2".parse::<Filter>(), Err(Error::UnknownColumn(_))));
        assert!(matches!("level=x..9".parse::<Filter>(), Err(Error::InvalidFilter { .. })));
        assert!(matches!("difficulty=HARD".parse::<Filter>(), Err(Error::InvalidFilter { .. })));
        assert!(matches!("title~(".parse::<Filter>(), Err(Error::InvalidFilter { .. })));
        assert!(matches!("bpm_min=".parse::<Filter>(), Err(Error::InvalidFilter { .. })));
        assert!(matches!(
            "length=99999999:00".parse::<Filter>(),
            Err(Error::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_column_headers_in_csv_order() {
        let headers: Vec<&str> = Column::all().map(Column::header).collect();
        assert_eq!(headers.first(), Some(&"ID"));
        assert_eq!(headers[12], "Chart Constant");
        assert_eq!(headers.last(), Some(&"BPM_Max"));
        assert_eq!(headers.len(), 23);
    }
}
