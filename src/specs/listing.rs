// src/specs/listing.rs
//! Listing pages: `/category/bestbeers/page/<N>/`.
//!
//! Review links sit in `div.blog-list.style-1`, one `<h3><a href=…>` per beer.

use crate::core::html;
use crate::core::sanitize::normalize_ws;

/// Listing URL for page `n`; `{}` in the template is the page number.
pub fn page_url(template: &str, n: u32) -> String {
    template.replacen("{}", &n.to_string(), 1)
}

/// Review URLs in document order. No list container → empty, never an error.
pub fn extract_links(doc: &str) -> Vec<String> {
    let page = html::parse(doc);
    let Some(list) = html::first(page.root_element(), "div.blog-list.style-1") else {
        logd!("listing: no blog-list container");
        return Vec::new();
    };

    let mut links = Vec::new();
    for heading in html::all(list, "h3") {
        match html::first(heading, "a").and_then(|a| html::attr(a, "href")) {
            Some(href) => links.push(href.trim().to_string()),
            None => logd!("listing: heading without link: {:?}", normalize_ws(&html::text(heading))),
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_fills_number() {
        assert_eq!(
            page_url("http://beermebc.com/category/bestbeers/page/{}/", 7),
            "http://beermebc.com/category/bestbeers/page/7/"
        );
    }

    #[test]
    fn links_in_document_order() {
        let doc = r#"
            <html><body>
              <h3><a href="http://elsewhere/not-a-beer/">Sidebar</a></h3>
              <div class="blog-list style-1">
                <div class="item"><h3><a href="http://beermebc.com/one/">One</a></h3></div>
                <div class="item"><h3><a href="http://beermebc.com/two/">Two</a></h3></div>
                <div class="item"><h3>No link here</h3></div>
                <div class="item"><h3><a href=" http://beermebc.com/three/ ">Three</a></h3></div>
              </div>
            </body></html>
        "#;
        assert_eq!(
            extract_links(doc),
            vec![
                "http://beermebc.com/one/",
                "http://beermebc.com/two/",
                "http://beermebc.com/three/",
            ]
        );
    }

    #[test]
    fn missing_container_is_empty() {
        let doc = r#"<html><body><div class="blog-list"><h3><a href="x">x</a></h3></div></body></html>"#;
        assert!(extract_links(doc).is_empty());
        assert!(extract_links("").is_empty());
        assert!(extract_links("<<<not html at all").is_empty());
    }
}
