use std::path::Path;

use anyhow::{Result, bail};
use arcdex_core::export::format_search_console;
use arcdex_core::search_titles;

use super::load_dataset;

/// List songs whose title matches `term`
pub fn run(data_dir: &Path, term: &str) -> Result<()> {
    let dataset = load_dataset(data_dir)?;
    let hits = search_titles(&dataset, term);
    if hits.is_empty() {
        bail!("No songs matching \"{}\"", term);
    }
    println!("{}", format_search_console(&hits));
    Ok(())
}
