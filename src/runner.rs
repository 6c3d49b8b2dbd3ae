// src/runner.rs
//
// Pipeline driver: fetch → locate/extract → normalize → persist.
// Thin on purpose; all decision logic lives in scrape/ and normalize.

use std::{error::Error, fs, path::PathBuf};

use tracing::info;

use crate::config::ExtractConfig;
use crate::core::{doc::Document, net};
use crate::diag::LogSink;
use crate::normalize;
use crate::params::{DEFAULT_OUT_DIR, Params};
use crate::scrape;
use crate::store::{self, Format};

pub struct RunSummary {
    pub out: PathBuf,
    pub rows: usize,
}

pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let html = match &params.input {
        Some(path) => {
            info!(path = %path.display(), "reading saved page");
            fs::read_to_string(path)?
        }
        None => {
            info!(url = %params.url, "fetching stats page");
            net::fetch_html(&params.url, params.retries)?
        }
    };

    let mut cfg = ExtractConfig::default();
    if let Some(markers) = &params.markers {
        cfg.marker_headers = markers.clone();
    }

    let doc = Document::parse(&html);
    let mut sink = LogSink;
    let table = scrape::locate(&doc, &cfg, &mut sink)?;
    let (headers, raw_rows) = scrape::extract(table, &mut sink)?;
    info!(columns = headers.len(), rows = raw_rows.len(), "extracted stats table");

    let source = params.source.as_deref().unwrap_or(&params.url);
    let records = normalize::normalize(&raw_rows, source, &cfg);

    let out = params.out.clone().unwrap_or_else(|| default_out(params.format));
    store::write_records(&out, &records, params.format)?;
    info!(rows = records.len(), out = %out.display(), "inserted rows");

    for rec in records.iter().take(params.preview) {
        info!(row = %serde_json::to_string(rec)?, "preview");
    }

    Ok(RunSummary { out, rows: records.len() })
}

fn default_out(format: Format) -> PathBuf {
    let name = match format {
        Format::Csv => "realgm_stats.csv",
        Format::Jsonl => "realgm_stats.jsonl",
    };
    PathBuf::from(DEFAULT_OUT_DIR).join(name)
}
