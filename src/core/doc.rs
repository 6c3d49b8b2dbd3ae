// src/core/doc.rs
//
// Document adapter over a best-effort HTML tree parse (`scraper`).
// Tables own copies of their cell texts, so the parsed tree is dropped as
// soon as `Document::parse` returns and the rest of the crate never touches
// the parser's node API.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{normalize_ws, truncate_chars};

/// Markup snippet length kept per table for diagnostics.
const SNIPPET_CHARS: usize = 200;

// Selector literals are compile-time constants; parse cannot fail.
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static THEAD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("thead").unwrap());
static TBODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Header,
    Data,
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub role: CellRole,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    /// Cell texts of both roles, in document order.
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.text.clone()).collect()
    }

    /// Texts of header-role cells only.
    pub fn header_texts(&self) -> Vec<String> {
        self.role_texts(CellRole::Header)
    }

    /// Texts of data-role cells only.
    pub fn data_texts(&self) -> Vec<String> {
        self.role_texts(CellRole::Data)
    }

    fn role_texts(&self, role: CellRole) -> Vec<String> {
        self.cells
            .iter()
            .filter(|c| c.role == role)
            .map(|c| c.text.clone())
            .collect()
    }
}

/// One candidate table.
///
/// `head`/`body` are `Some` when the corresponding section element exists,
/// even if it holds no rows; the extractor needs that distinction. `rows`
/// is every `<tr>` under the table in document order, header rows included.
///
/// Note: the HTML5 tree builder synthesizes a `<tbody>` around bare `<tr>`
/// children of `<table>`, so after a real parse `body` is `None` only for
/// tables with no rows outside `<thead>`/`<tfoot>`.
#[derive(Clone, Debug)]
pub struct Table {
    pub head: Option<Vec<Row>>,
    pub body: Option<Vec<Row>>,
    pub rows: Vec<Row>,
    /// Truncated markup of the table, for diagnostics and errors.
    pub snippet: String,
}

/// Parsed page. Queried, never mutated.
pub struct Document {
    tables: Vec<Table>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let dom = Html::parse_document(html);
        let tables = dom.select(&TABLE).map(read_table).collect();
        Self { tables }
    }

    /// All tables in document order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

fn read_table(el: ElementRef) -> Table {
    let head = el.select(&THEAD).next().map(read_rows);
    let body = el.select(&TBODY).next().map(read_rows);
    let rows = read_rows(el);
    let snippet = truncate_chars(&el.html(), SNIPPET_CHARS);
    Table { head, body, rows, snippet }
}

fn read_rows(scope: ElementRef) -> Vec<Row> {
    scope.select(&TR).map(read_row).collect()
}

fn read_row(tr: ElementRef) -> Row {
    let cells = tr
        .select(&CELL)
        .map(|c| Cell {
            role: if c.value().name() == "th" { CellRole::Header } else { CellRole::Data },
            text: normalize_ws(&c.text().collect::<String>()),
        })
        .collect();
    Row { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sections_roles_and_text() {
        let doc = Document::parse(
            r#"<table>
                <thead><tr><th> Player </th><th>Team</th></tr></thead>
                <tbody><tr><td><a>LeBron</a> James</td><td>LAL</td></tr></tbody>
            </table>"#,
        );
        let t = &doc.tables()[0];
        let head = t.head.as_ref().unwrap();
        assert_eq!(head[0].header_texts(), vec!["Player", "Team"]);

        let body = t.body.as_ref().unwrap();
        assert_eq!(body[0].data_texts(), vec!["LeBron James", "LAL"]);
        assert!(body[0].header_texts().is_empty());

        // rows covers every <tr>, header row included
        assert_eq!(t.rows.len(), 2);
        assert!(!t.snippet.is_empty());
    }

    #[test]
    fn bare_rows_get_a_synthesized_body() {
        // The HTML5 tree builder wraps bare <tr>s in a <tbody>.
        let doc = Document::parse("<table><tr><td>a</td></tr></table>");
        let t = &doc.tables()[0];
        assert!(t.head.is_none());
        assert_eq!(t.body.as_ref().unwrap().len(), 1);
        assert_eq!(t.rows.len(), 1);
    }

    #[test]
    fn no_tables_means_empty_list() {
        let doc = Document::parse("<p>nothing here</p>");
        assert!(doc.tables().is_empty());
    }
}
