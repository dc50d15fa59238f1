// src/core/html.rs
// Small query layer over `scraper`. Specs go through these helpers only,
// so the parser stays swappable.

use scraper::Selector;

pub use scraper::{ElementRef, Html};

/// Parse a whole document. html5ever repairs broken markup, so this never fails.
pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("bad selector {css:?}: {e:?}");
            None
        }
    }
}

/// First descendant of `scope` matching `css` (document order, `scope` excluded).
pub fn first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).next()
}

/// Every descendant of `scope` matching `css`, in document order.
pub fn all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => scope.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// `n`-th (0-based) descendant matching `css`.
pub fn nth<'a>(scope: ElementRef<'a>, css: &str, n: usize) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).nth(n)
}

/// Concatenated text of every descendant text node, untouched.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Texts of every `css` match under `scope`, joined with `", "`.
pub fn joined_texts(scope: ElementRef<'_>, css: &str) -> String {
    all(scope, css)
        .into_iter()
        .map(text)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

pub fn parent<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Next element named `tag` after `from` in document order. Descendants of
/// `from` come first, then everything that follows it.
pub fn next_named<'a>(doc: &'a Html, from: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != from.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}
