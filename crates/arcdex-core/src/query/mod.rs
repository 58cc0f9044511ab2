//! Browsing queries over a loaded `Dataset`.
//!
//! This module contains:
//! - `search_titles` / `resolve_song` - title search by ID slug with a fuzzy fallback
//! - `SongView` / `ChartCard` - the per-chart song card
//! - `compare` - percentile of one chart within its group
//! - `Filter` / `apply_filters` - column filters for the raw table

mod compare;
mod filter;
mod search;
mod song_view;

pub use compare::*;
pub use filter::*;
pub use search::*;
pub use song_view::*;
