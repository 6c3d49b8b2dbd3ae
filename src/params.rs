// src/params.rs

use std::path::PathBuf;

use crate::store::Format;

pub const DEFAULT_URL: &str = "https://basketball.realgm.com/nba/stats";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_PREVIEW: usize = 3;

#[derive(Clone)]
pub struct Params {
    pub url: String,                  // stats page to fetch
    pub input: Option<PathBuf>,       // parse a saved HTML file instead of fetching
    pub out: Option<PathBuf>,         // output file; default under DEFAULT_OUT_DIR
    pub format: Format,
    pub source: Option<String>,       // provenance override (defaults to url)
    pub markers: Option<Vec<String>>, // marker column names override
    pub retries: u32,                 // total fetch attempts
    pub preview: usize,               // rows to echo after a run
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            input: None,
            out: None,
            format: Format::Csv,
            source: None,
            markers: None,
            retries: DEFAULT_RETRIES,
            preview: DEFAULT_PREVIEW,
        }
    }
}
