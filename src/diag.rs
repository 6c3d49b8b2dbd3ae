// src/diag.rs
//
// Non-fatal extraction notices. The core never prints or logs on its own;
// callers pass a sink and decide what each notice means to them.

/// Irregularities the extraction recovers from locally.
/// Each carries a truncated snippet of the table in question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// No table matched the marker headers; largest table used instead.
    FallbackTable { snippet: String },
    /// No header section; first data-scope row used as the header row.
    HeaderFromDataRow { snippet: String },
    /// Header resolution produced zero cells.
    EmptyHeaderCells { snippet: String },
}

pub trait DiagnosticSink {
    fn notice(&mut self, d: Diagnostic);
}

/// Forwards notices to `tracing` at warn level.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn notice(&mut self, d: Diagnostic) {
        match d {
            Diagnostic::FallbackTable { snippet } => {
                tracing::warn!(snippet = %snippet, "no table matched marker headers; using largest table");
            }
            Diagnostic::HeaderFromDataRow { snippet } => {
                tracing::warn!(snippet = %snippet, "no header section; using first data row as header");
            }
            Diagnostic::EmptyHeaderCells { snippet } => {
                tracing::warn!(snippet = %snippet, "header resolution found no cells");
            }
        }
    }
}

/// Swallows notices.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn notice(&mut self, _d: Diagnostic) {}
}

/// Collects notices for later inspection (used by tests).
#[derive(Default)]
pub struct CollectSink(pub Vec<Diagnostic>);

impl DiagnosticSink for CollectSink {
    fn notice(&mut self, d: Diagnostic) {
        self.0.push(d);
    }
}
