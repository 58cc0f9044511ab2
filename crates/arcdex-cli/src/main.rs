mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise progress at info, or warn with --quiet
    let default_filter = if args.quiet {
        "arcdex=warn,arcdex_core=warn"
    } else {
        "arcdex=info,arcdex_core=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(args.config.as_deref());
    let data_dir = args.data_dir.unwrap_or_else(|| config.data.dir.clone());

    match args.command {
        Command::Scrape {
            only,
            wiki,
            retries,
        } => commands::scrape::run(config, &data_dir, &only, wiki, retries),
        Command::Search { term } => commands::search::run(&data_dir, &term),
        Command::Show {
            query,
            difficulty,
            platform,
            json,
        } => commands::show::run(&data_dir, &query, difficulty.as_deref(), platform.into(), json),
        Command::Compare {
            query,
            difficulty,
            platform,
            group,
            metric,
            json,
        } => commands::compare::run(
            &data_dir,
            &query,
            difficulty.as_deref(),
            platform.into(),
            group.into(),
            metric.into(),
            json,
        ),
        Command::Table {
            filters,
            format,
            output,
        } => commands::table::run(&data_dir, &filters, format, output.as_deref()),
    }
}
