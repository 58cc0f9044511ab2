//! Text normalization for scraped wiki values.
//!
//! Wiki infobox cells mix several facts into one string ("1000 / 1020",
//! "v1.0.0 (2017-03-30) / v1.0.0 (2019-09-12)"). These helpers split them into
//! the typed per-platform columns of the song table.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::chart::GameVersion;
use crate::error::{Error, Result};

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+[a-z]?").unwrap());
static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+-\d+-\d+").unwrap());

/// Stable row key for a title: ASCII-transliterated, lowercased, with every
/// non-word character removed.
///
/// Idempotent: `slugify(slugify(s)) == slugify(s)`.
pub fn slugify(raw: &str) -> String {
    deunicode::deunicode(raw)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Drop non-breaking spaces and surrounding whitespace.
pub fn clean_text(raw: &str) -> String {
    raw.replace('\u{a0}', "").trim().to_string()
}

/// Per-platform note counts: `(touch, joycon)`.
///
/// `"1000 / 1020"` → `(Some(1000), Some(1020))`, `"1000"` → `(Some(1000), None)`.
pub fn split_notes(raw: &str) -> (Option<u32>, Option<u32>) {
    let mut counts = INTEGER.find_iter(raw).map(|m| m.as_str().parse().ok());
    (counts.next().flatten(), counts.next().flatten())
}

/// Versions and dates parsed out of an "Added" cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddedInfo {
    pub version_mobile: Option<GameVersion>,
    pub version_switch: Option<GameVersion>,
    pub added_mobile: Option<NaiveDate>,
    pub added_switch: Option<NaiveDate>,
}

/// Split an "Added" cell into mobile and Switch versions and dates.
///
/// Only the last two matches of each kind count; with a single match only the
/// mobile slot is filled.
pub fn split_added(raw: &str) -> AddedInfo {
    let versions: Vec<&str> = VERSION.find_iter(raw).map(|m| m.as_str()).collect();
    let dates: Vec<&str> = DATE.find_iter(raw).map(|m| m.as_str()).collect();

    let (version_mobile, version_switch) = last_two(&versions);
    let (added_mobile, added_switch) = last_two(&dates);

    AddedInfo {
        version_mobile: version_mobile.and_then(|v| v.parse().ok()),
        version_switch: version_switch.and_then(|v| v.parse().ok()),
        added_mobile: added_mobile.and_then(parse_date),
        added_switch: added_switch.and_then(parse_date),
    }
}

/// Tempo range `(min, max)`; a single number fills both.
pub fn split_bpm(raw: &str) -> (Option<f32>, Option<f32>) {
    let numbers: Vec<f32> = NUMBER
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    let (min, max) = last_two(&numbers);
    (min, max.or(min))
}

/// Joy-Con note count after the Switch-availability rule.
///
/// A chart released on Switch without its own Joy-Con count uses the touch
/// count. Without a Switch release the scraped value stands.
pub fn resolve_joycon_notes(
    touch: Option<u32>,
    joycon: Option<u32>,
    version_switch: Option<GameVersion>,
) -> Option<u32> {
    if version_switch.is_some() {
        joycon.or(touch)
    } else {
        joycon
    }
}

/// Chart constant such as `"9.8"`.
pub fn parse_chart_constant(raw: &str) -> Result<f32> {
    NUMBER
        .find(raw)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::invalid_field("Chart Constant", raw))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn last_two<T: Copy>(items: &[T]) -> (Option<T>, Option<T>) {
    let tail = &items[items.len().saturating_sub(2)..];
    (tail.first().copied(), tail.get(1).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Tempestissimo"), "tempestissimo");
        assert_eq!(slugify("Last"), "last");
        assert_eq!(slugify("Grievous Lady"), "grievouslady");
        assert_eq!(slugify("#1f1e33"), "1f1e33");
        assert_eq!(slugify("Ävril -Flicka i krans-"), "avrilflickaikrans");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        let titles = ["Fracture Ray", "µ", "Ignotus Afterburn", "world.execute(me);", "γuarδina"];
        for title in titles {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("\u{a0}Hikari\u{a0} "), "Hikari");
        assert_eq!(clean_text("9\u{a0}+"), "9+");
    }

    #[test]
    fn test_split_notes() {
        assert_eq!(split_notes("120 / 98"), (Some(120), Some(98)));
        assert_eq!(split_notes("1540"), (Some(1540), None));
        assert_eq!(split_notes("?"), (None, None));
    }

    #[test]
    fn test_split_notes_keeps_positions() {
        // An out-of-range touch count must not shift the Joy-Con count over
        assert_eq!(split_notes("99999999999 / 98"), (None, Some(98)));
        assert_eq!(split_notes("1000 / 99999999999"), (Some(1000), None));
    }

    #[test]
    fn test_split_added_two_platforms() {
        let info = split_added("v1.0.0 (2017-03-30) / v1.0.0a (2019-09-12)");
        assert_eq!(info.version_mobile, Some(GameVersion::new(1, 0, 0)));
        assert_eq!(info.version_switch.unwrap().to_string(), "1.0.0a");
        assert_eq!(info.added_mobile, NaiveDate::from_ymd_opt(2017, 3, 30));
        assert_eq!(info.added_switch, NaiveDate::from_ymd_opt(2019, 9, 12));
    }

    #[test]
    fn test_split_added_keeps_last_two() {
        let info = split_added("1.5.0 (2018-01-01) 2.0.0 (2018-05-01) 3.0.0 (2019-01-01)");
        assert_eq!(info.version_mobile, Some(GameVersion::new(2, 0, 0)));
        assert_eq!(info.version_switch, Some(GameVersion::new(3, 0, 0)));
        assert_eq!(info.added_mobile, NaiveDate::from_ymd_opt(2018, 5, 1));
        assert_eq!(info.added_switch, NaiveDate::from_ymd_opt(2019, 1, 1));
    }

    #[test]
    fn test_split_added_mobile_only() {
        let info = split_added("5.2.0 (2023-12-05)");
        assert_eq!(info.version_mobile, Some(GameVersion::new(5, 2, 0)));
        assert_eq!(info.version_switch, None);
        assert_eq!(info.added_switch, None);
    }

    #[test]
    fn test_split_bpm() {
        assert_eq!(split_bpm("180"), (Some(180.0), Some(180.0)));
        assert_eq!(split_bpm("100-200"), (Some(100.0), Some(200.0)));
        assert_eq!(split_bpm("87.5"), (Some(87.5), Some(87.5)));
        assert_eq!(split_bpm("?"), (None, None));
    }

    #[test]
    fn test_parse_chart_constant() {
        assert_eq!(parse_chart_constant("9.8").unwrap(), 9.8);
        assert_eq!(parse_chart_constant("11").unwrap(), 11.0);
        assert!(matches!(
            parse_chart_constant("?"),
            Err(Error::InvalidField { field: "Chart Constant", .. })
        ));
    }

    #[test]
    fn test_resolve_joycon_notes() {
        let switch = Some(GameVersion::new(1, 0, 0));
        assert_eq!(resolve_joycon_notes(Some(900), None, switch), Some(900));
        assert_eq!(resolve_joycon_notes(Some(900), Some(880), switch), Some(880));
        assert_eq!(resolve_joycon_notes(Some(900), None, None), None);
    }
}
