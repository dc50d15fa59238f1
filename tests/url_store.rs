// tests/url_store.rs
use std::fs;

use beer_scrape::store::UrlStore;

#[test]
fn missing_file_is_empty_and_persist_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("beerURLs.txt");

    let mut store = UrlStore::load(&path).unwrap();
    assert!(store.is_empty());
    assert!(store.insert("http://b/1/"));
    assert!(store.insert("http://b/2/"));
    assert!(!store.insert("http://b/1/"));
    assert_eq!(store.persist().unwrap(), 2);

    assert_eq!(fs::read_to_string(&path).unwrap(), "http://b/1/\nhttp://b/2/\n");
    assert!(store.fresh().is_empty());
    assert_eq!(store.len(), 2);
}

#[test]
fn second_discovery_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beerURLs.txt");
    let found = ["http://b/1/", "http://b/2/", "http://b/2/", "http://b/3/"];

    for _ in 0..2 {
        let mut store = UrlStore::load(&path).unwrap();
        for url in found {
            store.insert(url);
        }
        store.persist().unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["http://b/1/", "http://b/2/", "http://b/3/"]);
}

#[test]
fn blank_lines_and_unterminated_last_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beerURLs.txt");
    fs::write(&path, "\n http://b/1/ \n\nhttp://b/1/\nhttp://b/2/").unwrap();

    let mut store = UrlStore::load(&path).unwrap();
    assert_eq!(store.urls().collect::<Vec<_>>(), vec!["http://b/1/", "http://b/2/"]);

    assert!(store.insert("http://b/3/"));
    assert_eq!(store.urls().last(), Some("http://b/3/"));
    store.persist().unwrap();

    let reread = UrlStore::load(&path).unwrap();
    assert_eq!(
        reread.urls().collect::<Vec<_>>(),
        vec!["http://b/1/", "http://b/2/", "http://b/3/"]
    );
}

#[test]
fn persist_without_new_urls_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beerURLs.txt");

    let mut store = UrlStore::load(&path).unwrap();
    assert_eq!(store.persist().unwrap(), 0);
    assert!(!path.exists());
}

#[test]
fn repeated_appends_leave_no_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beerURLs.txt");
    fs::write(&path, "").unwrap();

    for url in ["http://b/1/", "http://b/2/"] {
        let mut store = UrlStore::load(&path).unwrap();
        store.insert(url);
        store.persist().unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "http://b/1/\nhttp://b/2/\n");
}
