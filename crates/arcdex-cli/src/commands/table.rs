//! Table command: the raw song table, filtered.

use std::path::Path;

use anyhow::{Context, Result};
use arcdex_core::export::{
    export_table_json, export_table_tsv, generate_table_json, generate_table_tsv,
};
use arcdex_core::{Filter, apply_filters};

use super::load_dataset;
use crate::cli::TableFormat;

pub fn run(
    data_dir: &Path,
    filters: &[String],
    format: TableFormat,
    output: Option<&str>,
) -> Result<()> {
    let filters = filters
        .iter()
        .map(|expr| {
            expr.parse::<Filter>()
                .with_context(|| format!("Invalid filter: {}", expr))
        })
        .collect::<Result<Vec<_>>>()?;

    let dataset = load_dataset(data_dir)?;
    let rows = apply_filters(&dataset.songs, &filters);
    eprintln!("{} of {} charts", rows.len(), dataset.songs.len());

    match (output, format) {
        (Some(output_path), TableFormat::Tsv) => export_table_tsv(output_path, &rows)?,
        (Some(output_path), TableFormat::Json) => export_table_json(output_path, &rows)?,
        (None, TableFormat::Tsv) => println!("{}", generate_table_tsv(&rows)),
        (None, TableFormat::Json) => println!("{}", generate_table_json(&rows)?),
    }
    if let Some(output_path) = output {
        eprintln!("Exported to: {}", output_path);
    }
    Ok(())
}
