// src/error.rs

use thiserror::Error;

/// Fatal failures for one extraction attempt. Never retried internally;
/// retry policy belongs to the fetch layer and to callers.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no tables found in document; page structure may have changed")]
    NoTableFound,

    #[error("no headers found in stats table; page structure may have changed (snippet: {snippet})")]
    NoHeader { snippet: String },

    #[error("http fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
