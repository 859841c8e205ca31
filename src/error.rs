// src/error.rs

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Non-success status, timeout, or any other failure talking to the site.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("anchor text {text:?} is not a year: {source}")]
    YearParse {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The dataset was read before any page produced headers and rows.
    #[error("no crash data has been processed yet; run scrape() first")]
    NotProcessed,
}
