// src/bin/cli.rs
use beer_scrape::cli::{self, Args};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let _log_guard = beer_scrape::log::init()?;

    cli::run(args)?;
    Ok(())
}
