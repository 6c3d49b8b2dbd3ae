// src/scrape/extract.rs

use crate::core::doc::{Row, Table};
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::error::ScrapeError;

/// One accepted data row: (header, cell text) pairs in header order.
pub type RawRow = Vec<(String, String)>;

/// Derive the header list and the accepted data rows of a located table.
///
/// A row becomes a [`RawRow`] only when its data-cell count equals the
/// header count; everything else (separator rows, repeated sub-headers,
/// colspan decorations) is skipped without comment.
pub fn extract(
    table: &Table,
    sink: &mut dyn DiagnosticSink,
) -> Result<(Vec<String>, Vec<RawRow>), ScrapeError> {
    let (headers, header_from_data) = resolve_headers(table, sink);
    if headers.is_empty() {
        sink.notice(Diagnostic::EmptyHeaderCells { snippet: table.snippet.clone() });
        return Err(ScrapeError::NoHeader { snippet: table.snippet.clone() });
    }

    let data: &[Row] = table.body.as_deref().unwrap_or(&table.rows);

    // Header taken from the data scope itself: don't emit it again as data.
    let start = if header_from_data && data.first().is_some_and(|r| r.texts() == headers) {
        1
    } else {
        0
    };

    let mut rows: Vec<RawRow> = Vec::new();
    for row in &data[start..] {
        let cells = row.data_texts();
        if cells.len() != headers.len() {
            continue;
        }
        rows.push(headers.iter().cloned().zip(cells).collect());
    }
    Ok((headers, rows))
}

/// Header resolution, first step that yields cells wins:
/// 1. header-role cells of the first header-section row;
/// 2. without a header section, cells of either role from the first
///    data-scope row (reported, since it signals non-standard markup).
///
/// A header section that exists but yields no header cells is not papered
/// over; the caller turns the empty result into `NoHeader`.
fn resolve_headers(table: &Table, sink: &mut dyn DiagnosticSink) -> (Vec<String>, bool) {
    if let Some(head_rows) = &table.head {
        let headers = head_rows.first().map(Row::header_texts).unwrap_or_default();
        return (headers, false);
    }

    let scope: &[Row] = table.body.as_deref().unwrap_or(&table.rows);
    match scope.first() {
        Some(first) => {
            let texts = first.texts();
            if !texts.is_empty() {
                sink.notice(Diagnostic::HeaderFromDataRow {
                    snippet: table.snippet.clone(),
                });
            }
            (texts, true)
        }
        None => (Vec::new(), true),
    }
}
