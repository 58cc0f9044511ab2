//! Output formatting for the browsing commands.
//!
//! - raw song table as TSV or JSON
//! - colored console views of song cards, compare reports and search hits

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use crate::chart::SongRecord;
use crate::error::Result;
use crate::query::Column;

pub fn format_table_tsv_header() -> String {
    Column::all()
        .map(Column::header)
        .collect::<Vec<_>>()
        .join("\t")
}

/// One TSV line; absent cells are empty, tabs and newlines become spaces
pub fn format_table_tsv_row(row: &SongRecord) -> String {
    Column::all()
        .map(|column| {
            column
                .text(row)
                .map(|text| text.replace(['\t', '\n', '\r'], " "))
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("\t")
}

/// Generate table TSV string (for stdout output)
pub fn generate_table_tsv(rows: &[&SongRecord]) -> String {
    let mut lines = vec![format_table_tsv_header()];
    lines.extend(rows.iter().map(|row| format_table_tsv_row(row)));
    lines.join("\n")
}

/// Generate table JSON string; keys are the CSV column names
pub fn generate_table_json(rows: &[&SongRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(rows)?;
    Ok(json)
}

pub fn export_table_tsv<P: AsRef<Path>>(path: P, rows: &[&SongRecord]) -> Result<()> {
    fs::write(path, generate_table_tsv(rows))?;
    Ok(())
}

pub fn export_table_json<P: AsRef<Path>>(path: P, rows: &[&SongRecord]) -> Result<()> {
    fs::write(path, generate_table_json(rows)?)?;
    Ok(())
}
