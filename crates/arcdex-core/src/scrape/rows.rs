//! Raw chart → typed song row.

use std::str::FromStr;

use tracing::debug;

use super::song_page::{InfoField, RawChart};
use crate::chart::{Length, Level, SongRecord};
use crate::normalize::{
    parse_chart_constant, resolve_joycon_notes, split_added, split_bpm, split_notes,
};

/// Build the song table row for one scraped chart.
///
/// Malformed cells become absent values; the scrape keeps going.
pub fn normalize_chart(raw: &RawChart) -> SongRecord {
    let mut record = SongRecord::new(&raw.id, &raw.title, &raw.pack, &raw.artist, raw.difficulty);
    record.image = raw.image.clone();

    record.vocals = text(raw, InfoField::Vocals);
    record.genre = text(raw, InfoField::Genre);
    record.side = text(raw, InfoField::Side);
    record.background = text(raw, InfoField::Background);
    record.artwork = text(raw, InfoField::Artwork);
    record.chart_design = text(raw, InfoField::ChartDesign);

    record.level = parsed::<Level>(raw, InfoField::Level);
    record.length = parsed::<Length>(raw, InfoField::Length);
    record.chart_constant = raw.field(InfoField::ChartConstant).and_then(|value| {
        parse_chart_constant(value)
            .inspect_err(|e| debug!("{} {}: {}", raw.id, raw.difficulty, e))
            .ok()
    });

    if let Some(added) = raw.field(InfoField::Added) {
        let added = split_added(added);
        record.version_mobile = added.version_mobile;
        record.version_switch = added.version_switch;
        record.added_mobile = added.added_mobile;
        record.added_switch = added.added_switch;
    }

    let (touch, joycon) = raw
        .field(InfoField::Notes)
        .map(split_notes)
        .unwrap_or_default();
    record.notes_touch = touch;
    record.notes_joycon = resolve_joycon_notes(touch, joycon, record.version_switch);

    let (bpm_min, bpm_max) = raw.field(InfoField::Bpm).map(split_bpm).unwrap_or_default();
    record.bpm_min = bpm_min;
    record.bpm_max = bpm_max;

    record
}

fn text(raw: &RawChart, field: InfoField) -> Option<String> {
    raw.field(field).map(str::to_string)
}

fn parsed<T>(raw: &RawChart, field: InfoField) -> Option<T>
where
    T: FromStr<Err = crate::Error>,
{
    let value = raw.field(field)?;
    value
        .parse()
        .inspect_err(|e| debug!("{} {}: {}", raw.id, raw.difficulty, e))
        .ok()
}
