// src/scrape.rs
use std::{thread, time::Duration};

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    error::{Error, Result},
    file::ReviewSink,
    progress::Progress,
    specs::{listing, review},
    store::UrlStore,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoverySummary {
    pub pages_scanned: usize,
    pub pages_failed: usize,
    pub links_found: usize,
    pub new_urls: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub reviews_written: usize,
    pub reviews_skipped: usize,
}

/// Sleeps between consecutive requests of a run, never before the first one.
/// The pause is the one for the page about to be fetched, so the first review
/// after discovery still waits the detail pause.
#[derive(Debug, Default)]
pub struct Pacer {
    started: bool,
}

impl Pacer {
    pub fn new() -> Self { Self::default() }

    fn wait(&mut self, pause: Duration) {
        if self.started && !pause.is_zero() {
            thread::sleep(pause); // be polite
        }
        self.started = true;
    }
}

/// Walk the listing pages and queue every review URL not already in `store`.
/// A page that fails to load counts as a page without links.
pub fn discover(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    store: &mut UrlStore,
    pacer: &mut Pacer,
    progress: &mut dyn Progress,
) -> DiscoverySummary {
    let pages: Vec<u32> = scrape.pages().collect();
    let mut summary = DiscoverySummary::default();

    progress.begin("listing", pages.len());

    for n in pages {
        let url = listing::page_url(&scrape.listing_template, n);
        pacer.wait(scrape.listing_pause);

        let links = match fetcher.get(&url) {
            Ok(doc) => listing::extract_links(&doc),
            Err(e) => {
                loge!("listing page {n}: {e}");
                summary.pages_failed += 1;
                progress.item_failed(&url, &e.to_string());
                continue;
            }
        };

        let added = links.iter().filter(|link| store.insert(link)).count();
        logf!("listing page {n}: {} links, {added} new", links.len());

        summary.pages_scanned += 1;
        summary.links_found += links.len();
        summary.new_urls += added;
        progress.item_done(&url);
    }

    progress.finish();
    summary
}

/// Fetch, extract and write every URL in order.
/// Fetch failures, blank pages and unrepresentable rows skip that URL;
/// sink I/O errors abort.
pub fn collect_reviews(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    urls: &[String],
    sink: &mut ReviewSink,
    pacer: &mut Pacer,
    progress: &mut dyn Progress,
) -> Result<ExtractSummary> {
    let mut summary = ExtractSummary::default();

    progress.begin("reviews", urls.len());

    for url in urls {
        pacer.wait(scrape.detail_pause);

        let review = match review::fetch(fetcher, url, scrape.spec_scan) {
            Ok(r) => r,
            Err(e) => {
                loge!("review {url}: {e}");
                summary.reviews_skipped += 1;
                progress.item_failed(url, &e.to_string());
                continue;
            }
        };

        match sink.write(&review) {
            Ok(()) => {
                summary.reviews_written += 1;
                progress.item_done(url);
            }
            Err(e @ Error::Encoding { .. }) => {
                loge!("{e}; row not written");
                summary.reviews_skipped += 1;
                progress.item_failed(url, &e.to_string());
            }
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        }
    }

    progress.finish();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn pacer_sleeps_before_every_request_but_the_first() {
        let mut pacer = Pacer::new();
        let t = Instant::now();
        pacer.wait(Duration::from_millis(200));
        assert!(t.elapsed() < Duration::from_millis(200));

        let t = Instant::now();
        pacer.wait(Duration::from_millis(30));
        assert!(t.elapsed() >= Duration::from_millis(30));
    }
}
