// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    file::ReviewSink,
    progress::{NullProgress, Progress},
    scrape::{self, DiscoverySummary, ExtractSummary, Pacer},
    store::UrlStore,
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovery: Option<DiscoverySummary>,
    pub extraction: Option<ExtractSummary>,
    pub url_list: PathBuf,
    pub out_path: Option<PathBuf>,
}

/// Top-level runner: discovery and/or extraction, as `opts.mode` says.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Only environment failures are returned as errors: the URL list or the
/// output file cannot be read, created or written.
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let mode = opts.mode;
    let mut pacer = Pacer::new();
    let mut store = UrlStore::load(&opts.scrape.url_list)?;
    let mut summary = RunSummary { url_list: store.path().to_path_buf(), ..RunSummary::default() };

    if mode.discovers() {
        progress.log("Scanning listing pages…");
        let found = scrape::discover(fetcher, &opts.scrape, &mut store, &mut pacer, progress);
        let written = store.persist()?;
        logf!("{written} new urls appended to {}", store.path().display());
        summary.discovery = Some(found);
    }

    if mode.extracts() {
        let urls: Vec<String> = store.urls().map(String::from).collect();
        if urls.is_empty() {
            logw!("no urls in {}; run discovery first", store.path().display());
        }

        progress.log("Extracting reviews…");
        let mut sink = ReviewSink::create(&opts.export.out_path(), opts.export.format)?;
        let extracted = scrape::collect_reviews(
            fetcher, &opts.scrape, &urls, &mut sink, &mut pacer, progress,
        )?;
        let path = sink.finish()?;
        logf!("{} reviews written to {}", extracted.reviews_written, path.display());

        summary.extraction = Some(extracted);
        summary.out_path = Some(path);
    }

    Ok(summary)
}
