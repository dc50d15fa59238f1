// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub mode: RunMode,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which phases a run performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Read the URL list and extract every review.
    #[default]
    Extract,
    /// Walk the listing pages and grow the URL list, nothing else.
    Discover,
    DiscoverThenExtract,
}

impl RunMode {
    pub fn discovers(self) -> bool {
        matches!(self, RunMode::Discover | RunMode::DiscoverThenExtract)
    }
    pub fn extracts(self) -> bool {
        matches!(self, RunMode::Extract | RunMode::DiscoverThenExtract)
    }
}

/// How the Alcohol / Size / IBU paragraph scan treats a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpecScan {
    /// Size is only looked at when Alcohol was found in the same paragraph,
    /// IBU only when Size was.
    #[default]
    Coupled,
    /// All three keys are looked up in every paragraph.
    Independent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_template: String,
    pub first_page: u32,
    pub last_page: u32,
    pub listing_pause: Duration,
    pub detail_pause: Duration,
    pub url_list: PathBuf,
    pub spec_scan: SpecScan,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_template: s!(LISTING_URL_TEMPLATE),
            first_page: FIRST_LISTING_PAGE,
            last_page: LAST_LISTING_PAGE,
            listing_pause: Duration::from_millis(LISTING_PAUSE_MS),
            detail_pause: Duration::from_millis(DETAIL_PAUSE_MS),
            url_list: PathBuf::from(URL_LIST_FILE),
            spec_scan: SpecScan::Coupled,
        }
    }
}

impl ScrapeOptions {
    /// Listing page numbers, inclusive. Empty when the range is inverted.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.first_page..=self.last_page
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, out_path: None }
    }
}

impl ExportOptions {
    /// User path if one was set, otherwise `beer_info.<ext>` for the current format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(join!(DEFAULT_OUT_STEM, ".", self.format.ext())),
        }
    }

    /// Keeps whatever extension the user typed.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("beer_info.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("beer_info.tsv"));
    }

    #[test]
    fn user_path_keeps_its_extension() {
        let mut export = ExportOptions::default();
        export.set_path("out/reviews.txt");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out/reviews.txt"));

        export.set_path("  ");
        assert_eq!(export.out_path(), PathBuf::from("beer_info.tsv"));
    }

    #[test]
    fn run_mode_phases() {
        assert!(!RunMode::Extract.discovers());
        assert!(RunMode::Extract.extracts());
        assert!(RunMode::Discover.discovers());
        assert!(!RunMode::Discover.extracts());
        assert!(RunMode::DiscoverThenExtract.discovers());
        assert!(RunMode::DiscoverThenExtract.extracts());
    }
}
