use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::chart::{BackgroundRecord, PackRecord, SongRecord};
use crate::error::Result;

const BOM: char = '\u{feff}';

pub fn read_songs<P: AsRef<Path>>(path: P) -> Result<Vec<SongRecord>> {
    read_table(path)
}

pub fn read_packs<P: AsRef<Path>>(path: P) -> Result<Vec<PackRecord>> {
    read_table(path)
}

pub fn read_backgrounds<P: AsRef<Path>>(path: P) -> Result<Vec<BackgroundRecord>> {
    read_table(path)
}

pub fn write_songs<P: AsRef<Path>>(path: P, songs: &[SongRecord]) -> Result<()> {
    write_table(path, songs)
}

pub fn write_packs<P: AsRef<Path>>(path: P, packs: &[PackRecord]) -> Result<()> {
    write_table(path, packs)
}

pub fn write_backgrounds<P: AsRef<Path>>(path: P, backgrounds: &[BackgroundRecord]) -> Result<()> {
    write_table(path, backgrounds)
}

/// Parse CSV text with a header row. A leading UTF-8 BOM is ignored.
pub fn parse_table<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Serialize rows to CSV text with a header row.
pub fn format_table<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn read_table<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    parse_table(&fs::read_to_string(path)?)
}

fn write_table<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let file = fs::File::create(path)?;
    write_rows(file, rows)
}

fn write_rows<T: Serialize, W: Write>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
