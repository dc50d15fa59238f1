// src/specs/review.rs
//! Review (detail) pages.
//!
//! Where the fields live:
//! - `h1`: `"<Brewery> – <Beer>"`, sometimes just the beer.
//! - `div.rate-item`: `<strong>4.5</strong> … <strong>Aroma</strong>`.
//! - second `div.panel`: first `li` holds the style links; `li.graytext > p`
//!   are Pros, Cons and Conclusion, in that order.
//! - paragraphs next to `div.paragraph-row`: `Alcohol – 5.5%`, `Size – 650ml`, `IBU – 40`.
//! - `span.dtreviewed > span[title]`, `span.reviewer > a[title="Posts by …"]`.
//! - `div.article-foot`: `div.left` categories, `div.right` tags.
//! - review body: the first `p` after the second `h2` following `div.paragraph-row`.
//!
//! Every field is read on its own and is `None` when its markup is missing.

use crate::config::options::SpecScan;
use crate::core::html::{self, ElementRef, Html};
use crate::core::net::Fetch;
use crate::core::sanitize::{digits_only, last_token, title_case};
use crate::error::{Error, Result};
use crate::record::{Ratings, Review};

/// Brewery / beer separator in the page heading (EN DASH).
pub const NAME_SEP: char = '–';

/// Fetch one review page and extract it.
/// A page that yields none of the fields (blank body, error page) is
/// `Error::EmptyPage` and produces no record.
pub fn fetch(fetcher: &dyn Fetch, url: &str, scan: SpecScan) -> Result<Review> {
    let doc = fetcher.get(url)?;
    if doc.trim().is_empty() {
        return Err(Error::EmptyPage { url: s!(url) });
    }

    let review = extract(&doc, url, scan);
    if review.is_blank() {
        return Err(Error::EmptyPage { url: s!(url) });
    }
    Ok(review)
}

/// Extract a review from an already fetched page.
pub fn extract(doc: &str, url: &str, scan: SpecScan) -> Review {
    let page = html::parse(doc);
    let root = page.root_element();

    let (name, brewery) = match html::first(root, "h1") {
        Some(h1) => {
            let (name, brewery) = split_heading(&html::text(h1));
            (Some(name), brewery)
        }
        None => (None, None),
    };

    let panel = html::nth(root, "div.panel", 1);
    let [pros, cons, conclusion] = verdicts(panel);
    let specs = beer_specs(root, scan);

    Review {
        name,
        brewery,
        ratings: ratings(root),
        beer_type: panel.and_then(beer_type),
        pros,
        cons,
        conclusion,
        alcohol: specs.alcohol,
        ibu: specs.ibu,
        size: specs.size,
        date_reviewed: date_reviewed(root),
        reviewer: reviewer(root),
        categories: foot_links(root, "div.left"),
        tags: foot_links(root, "div.right"),
        review_text: review_text(&page),
        url: url.to_string(),
    }
}

/// `"Brewery – Beer"` → `("Beer", Some("Brewery"))`.
/// One char on each side of the separator is dropped (the spaces).
/// Without a separator the whole heading is the name.
pub fn split_heading(heading: &str) -> (String, Option<String>) {
    let chars: Vec<char> = heading.chars().collect();
    match chars.iter().position(|&c| c == NAME_SEP) {
        Some(i) => {
            let brewery: String = chars[..i.saturating_sub(1)].iter().collect();
            let name: String = chars
                .get(i + 2..)
                .map(|rest| rest.iter().collect())
                .unwrap_or_default();
            (name, Some(brewery))
        }
        None => (heading.to_string(), None),
    }
}

fn ratings(root: ElementRef<'_>) -> Ratings {
    let mut out = Ratings::default();

    for item in html::all(root, "div.rate-item") {
        let strongs = html::all(item, "strong");
        let (Some(&score), Some(&label)) = (strongs.first(), strongs.get(1)) else {
            logd!("rate-item without score/label pair");
            continue;
        };
        let label = title_case(html::text(label).trim());
        let score_text = html::text(score);
        match score_text.trim().parse::<f64>() {
            Ok(v) => out.set(&label, v),
            Err(_) => logd!("rating {label}: unparsable score {score_text:?}"),
        }
    }

    // Some reviews use the alternate criteria names.
    if let Some(v) = out.get("Flavour") { out.taste = Some(v); }
    if let Some(v) = out.get("Mouthfeel") { out.palate = Some(v); }
    out
}

fn beer_type(panel: ElementRef<'_>) -> Option<String> {
    html::first(panel, "li").map(|li| html::joined_texts(li, "a"))
}

/// Pros, Cons, Conclusion.
fn verdicts(panel: Option<ElementRef<'_>>) -> [Option<String>; 3] {
    let items = panel.map(|p| html::all(p, "li.graytext")).unwrap_or_default();
    std::array::from_fn(|i| {
        items
            .get(i)
            .and_then(|&li| html::first(li, "p"))
            .map(html::text)
    })
}

#[derive(Debug, Default)]
struct BeerSpecs {
    alcohol: Option<String>,
    size: Option<String>,
    ibu: Option<String>,
}

fn beer_specs(root: ElementRef<'_>, scan: SpecScan) -> BeerSpecs {
    let mut specs = BeerSpecs::default();
    let Some(scope) = html::first(root, "div.paragraph-row").and_then(html::parent) else {
        return specs;
    };

    for p in html::all(scope, "p") {
        let text = title_case(&html::text(p));
        let tokens: Vec<&str> = text.split_whitespace().collect();
        scan_paragraph(&tokens, scan, &mut specs);
    }
    specs
}

/// Later paragraphs overwrite earlier hits.
fn scan_paragraph(tokens: &[&str], scan: SpecScan, specs: &mut BeerSpecs) {
    let coupled = scan == SpecScan::Coupled;

    let alcohol = value_after(tokens, "Alcohol");
    if let Some(v) = alcohol { specs.alcohol = Some(s!(v)); }
    if coupled && alcohol.is_none() { return; }

    let size = value_after(tokens, "Size");
    if let Some(v) = size { specs.size = Some(digits_only(v)); }
    if coupled && size.is_none() { return; }

    if let Some(v) = value_after(tokens, "Ibu") { specs.ibu = Some(s!(v)); }
}

/// `["Alcohol", "–", "5.5%"]`, `"Alcohol"` → `"5.5%"`.
fn value_after<'t>(tokens: &[&'t str], key: &str) -> Option<&'t str> {
    let i = tokens.iter().position(|t| *t == key)?;
    tokens.get(i + 2).copied()
}

fn date_reviewed(root: ElementRef<'_>) -> Option<String> {
    html::first(root, "span.dtreviewed")
        .and_then(|s| html::first(s, "span"))
        .and_then(|s| html::attr(s, "title"))
        .map(String::from)
}

fn reviewer(root: ElementRef<'_>) -> Option<String> {
    html::first(root, "span.reviewer")
        .and_then(|s| html::first(s, "a"))
        .and_then(|a| html::attr(a, "title"))
        .and_then(last_token)
        .map(String::from)
}

fn foot_links(root: ElementRef<'_>, side: &str) -> Option<String> {
    html::first(root, "div.article-foot")
        .and_then(|foot| html::first(foot, side))
        .map(|div| html::joined_texts(div, "a"))
}

fn review_text(page: &Html) -> Option<String> {
    let row = html::first(page.root_element(), "div.paragraph-row")?;
    let first = html::next_named(page, row, "h2")?;
    let second = html::next_named(page, first, "h2")?;
    html::next_named(page, second, "p").map(html::text)
}
