//! Configuration and scraping constants.
//!
//! This module contains:
//! - `Config` - the TOML configuration file (`[scrape]` and `[data]` tables)
//! - Wiki, HTTP and retry constants used as defaults

mod settings;

pub use settings::*;

/// Fandom wiki addressing.
pub mod wiki {
    /// Default wiki id (`https://{wiki}.fandom.com`).
    pub const DEFAULT_WIKI: &str = "arcaea";

    /// URL template; `{wiki}` and `{page}` are substituted.
    pub const BASE_URL: &str = "https://{wiki}.fandom.com/wiki/{page}";

    /// Index page listing every song in release order.
    pub const SONG_INDEX_PAGE: &str = "Songs by Date";

    /// Page listing song backgrounds.
    pub const BACKGROUND_PAGE: &str = "Song Backgrounds";

    /// Pack names with this prefix share one wiki page.
    pub const MEMORY_ARCHIVE_PREFIX: &str = "Memory Archive:";

    /// Page used for every `Memory Archive:` pack.
    pub const MEMORY_ARCHIVE_PAGE: &str = "Memory Archive";

    /// Number of leading background tables that hold song backgrounds.
    pub const BACKGROUND_TABLES: usize = 3;
}

/// HTTP client defaults.
pub mod http {
    /// Whole-request timeout in seconds.
    pub const TIMEOUT_SECS: u64 = 30;

    pub const USER_AGENT: &str = concat!("arcdex/", env!("CARGO_PKG_VERSION"));

    /// Pause between consecutive page requests in milliseconds.
    pub const REQUEST_DELAY_MS: u64 = 0;
}

/// Page fetch retry configuration.
///
/// Exponential backoff: 500ms → 1s → 2s → 4s.
pub mod retry {
    /// Default number of attempts per page (1 = no retry).
    pub const DEFAULT_ATTEMPTS: u32 = 3;

    /// Delay (in ms) before each retry attempt.
    pub const RETRY_DELAYS_MS: [u64; 4] = [500, 1000, 2000, 4000];
}

/// Dataset file names.
pub mod data {
    pub const DEFAULT_DIR: &str = "data/arcaea";
    pub const SONG_FILE: &str = "song_data.csv";
    pub const PACK_FILE: &str = "pack_data.csv";
    pub const BACKGROUND_FILE: &str = "background_data.csv";
}
