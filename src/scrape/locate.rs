// src/scrape/locate.rs

use crate::config::ExtractConfig;
use crate::core::doc::{Document, Row, Table};
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::error::ScrapeError;

/// Find the stats table.
///
/// First table, in document order, with any candidate row whose cell texts
/// intersect the marker headers wins. Sites restructure markup without
/// notice, so matching known column names beats positional or CSS-selector
/// rules; when nothing matches, fall back to the table with the most rows
/// rather than failing.
pub fn locate<'a>(
    doc: &'a Document,
    cfg: &ExtractConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<&'a Table, ScrapeError> {
    let tables = doc.tables();
    if tables.is_empty() {
        return Err(ScrapeError::NoTableFound);
    }

    for table in tables {
        if candidate_rows(table).any(|row| matches_markers(row, cfg)) {
            return Ok(table);
        }
    }

    // Largest by total row count; first encountered wins ties.
    let mut best = &tables[0];
    for t in &tables[1..] {
        if t.rows.len() > best.rows.len() {
            best = t;
        }
    }
    sink.notice(Diagnostic::FallbackTable { snippet: best.snippet.clone() });
    Ok(best)
}

/// Rows scanned for marker headers: header-section rows first, then
/// body-section rows (all rows when there is no body section).
fn candidate_rows(table: &Table) -> impl Iterator<Item = &Row> {
    let head: &[Row] = table.head.as_deref().unwrap_or(&[]);
    let data: &[Row] = table.body.as_deref().unwrap_or(&table.rows);
    head.iter().chain(data.iter())
}

fn matches_markers(row: &Row, cfg: &ExtractConfig) -> bool {
    row.cells
        .iter()
        .any(|c| cfg.marker_headers.iter().any(|m| m == &c.text))
}
