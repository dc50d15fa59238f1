//! # Scraping “specs” module
//!
//! Page-specific extraction for the review site. Each spec knows *where the
//! data lives in one kind of page* and turns that page into plain values.
//!
//! ## What lives here
//! - **Pure HTML reading** of listing pages (`listing`) and review pages (`review`).
//! - **Selector choice**, expressed through the `core::html` query helpers only.
//! - **Per-field tolerance**: every field is looked up on its own and comes back
//!   as `Option`; one missing section never costs the rest of the record.
//!
//! ## What does **not** live here
//! - Deciding which pages to visit, pacing, or the URL list (`scrape`, `store`).
//! - Writing rows (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::discover → specs::listing::extract_links
//!            ↘ scrape::collect_reviews → specs::review::fetch → file::ReviewSink
//! ```
//!
//! ## Testing notes
//! - Specs are tested offline against synthetic snippets and the saved
//!   fixtures in `tests/fixtures/`.
pub mod listing;
pub mod review;
