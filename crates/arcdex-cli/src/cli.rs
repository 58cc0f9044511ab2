//! CLI argument definitions for arcdex.

use std::path::PathBuf;

use arcdex_core::{CompareGroup, CompareMetric, Platform};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arcdex")]
#[command(about = "Arcaea wiki scraper and song browser", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = "ARCDEX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Dataset directory (overrides the config file)
    #[arg(long, value_name = "DIR", env = "ARCDEX_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape the wiki and write the CSV datasets
    Scrape {
        /// Tables to scrape (default: all)
        #[arg(long, value_enum)]
        only: Vec<ScrapeStage>,
        /// Fandom wiki id
        #[arg(long)]
        wiki: Option<String>,
        /// Attempts per page on transient failures
        #[arg(long)]
        retries: Option<u32>,
    },
    /// Search song titles
    Search {
        /// Title or part of it
        term: String,
    },
    /// Show the song card of one chart
    Show {
        /// Song ID or search term
        query: String,
        /// Difficulty (PST, PRS, FTR, BYD, BYD-M, BYD-E or 0-5)
        #[arg(long, short)]
        difficulty: Option<String>,
        #[arg(long, short, value_enum, default_value = "mobile")]
        platform: PlatformArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank a chart against charts of the same group
    Compare {
        /// Song ID or search term
        query: String,
        /// Difficulty (PST, PRS, FTR, BYD, BYD-M, BYD-E or 0-5)
        #[arg(long, short)]
        difficulty: Option<String>,
        #[arg(long, short, value_enum, default_value = "mobile")]
        platform: PlatformArg,
        /// Charts to compare against
        #[arg(long, short, value_enum, default_value = "difficulty")]
        group: GroupArg,
        /// Value to rank by
        #[arg(long = "value", short = 'v', value_enum, default_value = "chart-constant")]
        metric: MetricArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the song table, optionally filtered
    Table {
        /// Filter such as `level=9..10+`, `difficulty=FTR,BYD` or `artist~^Camellia`
        #[arg(long = "filter", short = 'f', value_name = "FILTER")]
        filters: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "tsv")]
        format: TableFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ScrapeStage {
    Songs,
    Packs,
    Backgrounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlatformArg {
    Mobile,
    Switch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupArg {
    Difficulty,
    Level,
    Pack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricArg {
    ChartConstant,
    Notes,
    MinBpm,
    MaxBpm,
    Length,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TableFormat {
    Tsv,
    Json,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Mobile => Platform::Mobile,
            PlatformArg::Switch => Platform::Switch,
        }
    }
}

impl From<GroupArg> for CompareGroup {
    fn from(value: GroupArg) -> Self {
        match value {
            GroupArg::Difficulty => CompareGroup::Difficulty,
            GroupArg::Level => CompareGroup::Level,
            GroupArg::Pack => CompareGroup::Pack,
        }
    }
}

impl From<MetricArg> for CompareMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::ChartConstant => CompareMetric::ChartConstant,
            MetricArg::Notes => CompareMetric::Notes,
            MetricArg::MinBpm => CompareMetric::MinBpm,
            MetricArg::MaxBpm => CompareMetric::MaxBpm,
            MetricArg::Length => CompareMetric::Length,
        }
    }
}
