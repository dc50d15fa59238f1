// src/config/consts.rs

// Net config
pub const LISTING_URL_TEMPLATE: &str = "http://beermebc.com/category/bestbeers/page/{}/";
pub const FIRST_LISTING_PAGE: u32 = 1;
pub const LAST_LISTING_PAGE: u32 = 35;
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_5) \
AppleWebKit/603.2.5 (KHTML, like Gecko) Version/10.1.1 Safari/603.2.5";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Be polite
pub const LISTING_PAUSE_MS: u64 = 3_000;
pub const DETAIL_PAUSE_MS: u64 = 5_000;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const URL_LIST_FILE: &str = "beerURLs.txt";

// Export
pub const DEFAULT_OUT_STEM: &str = "beer_info";
