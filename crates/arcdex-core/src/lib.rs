pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod network;
pub mod normalize;
pub mod query;
pub mod retry;
pub mod scrape;
pub mod storage;

pub use chart::{
    BackgroundRecord, Difficulty, GameVersion, Length, Level, PackRecord, Platform, SongRecord,
    parse_difficulty,
};
pub use config::{Config, DataConfig, ScrapeConfig};
pub use error::{Error, Result};
pub use network::{HttpPageSource, PageSource, StaticPages};
pub use query::{
    ChartCard, Column, CompareGroup, CompareMetric, CompareReport, Filter, SearchHit, SongView,
    apply_filters, compare, resolve_song, search_titles,
};
pub use scrape::Scraper;
pub use storage::Dataset;
