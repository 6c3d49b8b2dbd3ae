// src/core/net.rs
//
// Blocking HTTP GET with per-site headers and a bounded retry loop.
// Everything that can block or fail transiently lives here; the extraction
// core only ever sees a complete HTML string.

use std::{thread, time::Duration};

use crate::error::ScrapeError;
use crate::headers;

const TIMEOUT_SECS: u64 = 20;
const RETRY_PAUSE_MS: u64 = 500;

/// Fetch a page body. `attempts` is the total number of tries; the last
/// error is returned once they are exhausted.
pub fn fetch_html(url: &str, attempts: u32) -> Result<String, ScrapeError> {
    let attempts = attempts.max(1);
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .default_headers(headers::for_url(url))
        .build()?;

    let mut attempt = 0;
    loop {
        attempt += 1;
        let result = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text());
        match result {
            Ok(body) => return Ok(body),
            Err(e) if attempt < attempts => {
                tracing::warn!(url, attempt, error = %e, "fetch failed; retrying");
                thread::sleep(Duration::from_millis(RETRY_PAUSE_MS * u64::from(attempt)));
            }
            Err(e) => return Err(e.into()),
        }
    }
}
