// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::config::options::{AppOptions, ExportFormat, RunMode, SpecScan};
use crate::core::net::HttpFetcher;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Extract every URL in the URL list
    Extract,
    /// Only grow the URL list from the listing pages
    Discover,
    /// Grow the URL list, then extract
    DiscoverThenExtract,
}

impl From<ModeArg> for RunMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Extract => RunMode::Extract,
            ModeArg::Discover => RunMode::Discover,
            ModeArg::DiscoverThenExtract => RunMode::DiscoverThenExtract,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

/// Scrape beer reviews into a table.
#[derive(Debug, Parser)]
#[command(name = "beer_scrape", version, about)]
pub struct Args {
    /// Which phases to run
    #[arg(long, value_enum, default_value_t = ModeArg::Extract)]
    pub mode: ModeArg,

    /// Newline-delimited URL list (read, and appended to by discovery)
    #[arg(long, value_name = "FILE")]
    pub urls: Option<PathBuf>,

    /// Output table [default: beer_info.<format>]
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// First listing page to scan
    #[arg(long)]
    pub first_page: Option<u32>,

    /// Last listing page to scan (inclusive)
    #[arg(long)]
    pub last_page: Option<u32>,

    /// Pause between listing pages, in milliseconds
    #[arg(long, value_name = "MS")]
    pub listing_delay_ms: Option<u64>,

    /// Pause between review pages, in milliseconds
    #[arg(long, value_name = "MS")]
    pub detail_delay_ms: Option<u64>,

    /// Look for Size and IBU in every paragraph, not only next to Alcohol
    #[arg(long)]
    pub independent_specs: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions { mode: self.mode.into(), ..AppOptions::default() };

        let scrape = &mut opts.scrape;
        if let Some(p) = self.urls { scrape.url_list = p; }
        if let Some(n) = self.first_page { scrape.first_page = n; }
        if let Some(n) = self.last_page { scrape.last_page = n; }
        if let Some(ms) = self.listing_delay_ms { scrape.listing_pause = Duration::from_millis(ms); }
        if let Some(ms) = self.detail_delay_ms { scrape.detail_pause = Duration::from_millis(ms); }
        if self.independent_specs { scrape.spec_scan = SpecScan::Independent; }

        opts.export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        if let Some(p) = self.out { opts.export.set_path(&p.to_string_lossy()); }
        opts
    }
}

/// Prints every page as it is handled.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, phase: &str, total: usize) {
        self.total = total;
        self.done = 0;
        println!("{phase}: {total} pages");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, url: &str) {
        self.done += 1;
        println!("[{}/{}] {url}", self.done, self.total);
    }
    fn item_failed(&mut self, url: &str, reason: &str) {
        self.done += 1;
        println!("[{}/{}] {url} FAILED: {reason}", self.done, self.total);
    }
}

pub fn run(args: Args) -> crate::error::Result<RunSummary> {
    let opts = args.into_options();
    let fetcher = HttpFetcher::new()?;
    let mut progress = ConsoleProgress { total: 0, done: 0 };

    let summary = runner::run(&opts, &fetcher, Some(&mut progress))?;
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    if let Some(d) = &summary.discovery {
        println!(
            "Scanned {} listing pages ({} failed): {} links, {} new → {}",
            d.pages_scanned, d.pages_failed, d.links_found, d.new_urls,
            summary.url_list.display()
        );
    }
    if let (Some(x), Some(path)) = (&summary.extraction, &summary.out_path) {
        println!(
            "Wrote {} reviews ({} skipped) → {}",
            x.reviews_written, x.reviews_skipped, path.display()
        );
    }
}
