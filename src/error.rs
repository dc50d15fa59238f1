// src/error.rs
use thiserror::Error;

/// Errors surfaced by the library. Structural misses inside a page are not
/// errors; they come back as `None` fields.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("{url} has none of the review fields")]
    EmptyPage { url: String },

    #[error("row for {url} is not representable as ASCII")]
    Encoding { url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
