//! Chart-related types and data structures.
//!
//! This module contains the row types of the three datasets and their value types:
//! - `Difficulty` - difficulty tiers (Past, Present, Future, Beyond and its variants)
//! - `Level`, `Length`, `GameVersion` - typed column values
//! - `Platform` - mobile or Switch, selecting per-platform columns
//! - `SongRecord`, `PackRecord`, `BackgroundRecord` - dataset rows

mod difficulty;
mod length;
mod level;
mod pack;
mod platform;
mod song;
mod version;

pub use difficulty::*;
pub use length::*;
pub use level::*;
pub use pack::*;
pub use platform::*;
pub use song::*;
pub use version::*;
