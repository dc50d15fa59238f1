// tests/review_fixture.rs
//
// Full extraction against a saved review page.
//
use beer_scrape::config::options::SpecScan;
use beer_scrape::record::Field;
use beer_scrape::specs::{listing, review};

const REVIEW: &str = include_str!("fixtures/review.html");
const LISTING: &str = include_str!("fixtures/listing.html");
const URL: &str = "http://beermebc.com/driftwood-fat-tug-ipa/";

#[test]
fn every_field_from_saved_page() {
    let r = review::extract(REVIEW, URL, SpecScan::Coupled);

    assert_eq!(r.name.as_deref(), Some("Fat Tug IPA"));
    assert_eq!(r.brewery.as_deref(), Some("Driftwood Brewery"));

    assert_eq!(r.ratings.appearance, Some(4.5));
    assert_eq!(r.ratings.aroma, Some(4.5));
    assert_eq!(r.ratings.get("Flavour"), Some(5.0));
    assert_eq!(r.ratings.taste, Some(5.0));
    assert_eq!(r.ratings.get("Mouthfeel"), Some(4.0));
    assert_eq!(r.ratings.palate, Some(4.0));
    assert_eq!(r.ratings.total, None);

    assert_eq!(r.beer_type.as_deref(), Some("India Pale Ale, Northwest"));
    assert_eq!(r.pros.as_deref(), Some("Huge tropical hop character"));
    assert_eq!(r.cons.as_deref(), Some("Hard to find fresh in the summer"));
    assert_eq!(r.conclusion.as_deref(), Some("A benchmark West Coast IPA – a must try"));

    assert_eq!(r.alcohol.as_deref(), Some("7.0%"));
    assert_eq!(r.size.as_deref(), Some("650"));
    assert_eq!(r.ibu.as_deref(), Some("80+"));

    assert_eq!(r.date_reviewed.as_deref(), Some("2013-07-14"));
    assert_eq!(r.reviewer.as_deref(), Some("Mike"));
    assert_eq!(r.categories.as_deref(), Some("Best Beers, Reviews"));
    assert_eq!(r.tags.as_deref(), Some("Driftwood, IPA, Victoria"));

    let text = r.review_text.as_deref().unwrap();
    assert!(text.starts_with("Pours a hazy orange"), "{text}");
    assert_eq!(r.url, URL);
}

#[test]
fn scan_modes_agree_when_specs_share_a_paragraph() {
    let coupled = review::extract(REVIEW, URL, SpecScan::Coupled);
    let independent = review::extract(REVIEW, URL, SpecScan::Independent);
    assert_eq!(coupled, independent);
}

#[test]
fn export_row_of_saved_page() {
    let row = review::extract(REVIEW, URL, SpecScan::Coupled).to_row();
    let col = |f: Field| Field::ALL.iter().position(|&x| x == f).unwrap();

    assert_eq!(row[col(Field::Taste)], "5.0");
    assert_eq!(row[col(Field::Total)], "");
    // en dash replaced by one space
    assert_eq!(row[col(Field::Conclusion)], "A benchmark West Coast IPA   a must try");
    assert!(row.iter().all(|c| c.is_ascii()));
}

#[test]
fn listing_links_from_saved_page() {
    assert_eq!(
        listing::extract_links(LISTING),
        vec![
            "http://beermebc.com/driftwood-fat-tug-ipa/",
            "http://beermebc.com/phillips-blue-buck/",
            "http://beermebc.com/four-winds-saison/",
        ]
    );
}

#[test]
fn review_page_is_not_a_listing() {
    assert!(listing::extract_links(REVIEW).is_empty());
}
