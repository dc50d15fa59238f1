// src/core/net.rs
// HTTP GET with the browser-like headers the site expects.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::consts::{ACCEPT, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Anything that can turn a URL into a document body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking reqwest client, one per run so connections are reused.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|source| Error::Request { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let request_err = |source| Error::Request { url: url.to_string(), source };

        let resp = self.client.get(url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.text().map_err(request_err)?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}
