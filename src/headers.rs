// src/headers.rs
//
// Request header composition: a browser-like default set, per-site referer
// presets for the stats hosts we scrape, and a rotated User-Agent pool.

use rand::Rng;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT, HeaderMap, HeaderValue, REFERER, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};

const USER_AGENTS: &[&str] = &[
    // Chrome on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/114.0.0.0 Safari/537.36",
    // Firefox on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:114.0) Gecko/20100101 Firefox/114.0",
    // Safari on macOS
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5) AppleWebKit/605.1.15 (KHTML, like Gecko) \
     Version/16.5 Safari/605.1.15",
    // Edge on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/114.0.0.0 Safari/537.36 Edg/114.0.1823.43",
    // Chrome on Android
    "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/114.0.0.0 Mobile Safari/537.36",
];

pub fn random_user_agent() -> &'static str {
    let i = rand::rng().random_range(0..USER_AGENTS.len());
    USER_AGENTS[i]
}

/// Referer preset for known stats hosts.
fn referer_for(url: &str) -> Option<&'static str> {
    let lower = url.to_ascii_lowercase();
    if lower.contains("realgm.com") {
        Some("https://basketball.realgm.com/")
    } else if lower.contains("basketball-reference.com") {
        Some("https://www.basketball-reference.com/")
    } else if lower.contains("espn.com") {
        Some("https://www.espn.com/nba/")
    } else {
        None
    }
}

/// Compose headers for one request: defaults, then the site referer if the
/// host is known, then a User-Agent from the pool.
pub fn for_url(url: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert(DNT, HeaderValue::from_static("1"));
    h.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

    if let Some(referer) = referer_for(url) {
        h.insert(REFERER, HeaderValue::from_static(referer));
    }
    h.insert(USER_AGENT, HeaderValue::from_static(random_user_agent()));
    h
}
