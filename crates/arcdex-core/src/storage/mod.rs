//! CSV dataset storage.
//!
//! This module contains:
//! - `Dataset` - the song, pack and background tables held together
//! - `read_*` / `write_*` functions for each table file

mod dataset;
mod tables;

pub use dataset::*;
pub use tables::*;
