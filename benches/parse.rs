// benches/parse.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rg_scrape::config::ExtractConfig;
use rg_scrape::core::doc::Document;
use rg_scrape::diag::NullSink;
use rg_scrape::normalize::normalize;
use rg_scrape::scrape::{extract, locate};

/// Synthetic stats page: a couple of decoy tables plus one wide stats table.
fn build_page(rows: usize) -> String {
    let mut html = String::from(
        "<html><body>\
         <table><tr><td>nav</td><td>links</td></tr></table>\
         <table><tr><td>ad</td></tr><tr><td>ad</td></tr></table>\
         <table><thead><tr>\
         <th></th><th>Player</th><th>Team</th><th>GP</th><th>MPG</th>\
         <th>FG%</th><th>3P%</th><th>FT%</th><th>PPG</th><th>RPG</th><th>APG</th>\
         </tr></thead><tbody>",
    );
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>Player {}</td><td>LAL</td><td>{}</td><td>34.1</td>\
             <td>52.3</td><td>38.9</td><td>75.0</td><td>25.7</td><td>7.3</td><td>8.3</td></tr>",
            i + 1,
            i + 1,
            60 + (i % 22),
        ));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let page = build_page(500);
    let cfg = ExtractConfig::default();

    c.bench_function("document_parse", |b| {
        b.iter(|| {
            let doc = Document::parse(black_box(&page));
            black_box(doc.tables().len())
        })
    });

    c.bench_function("locate_extract_normalize", |b| {
        let doc = Document::parse(&page);
        b.iter(|| {
            let mut sink = NullSink;
            let table = locate(black_box(&doc), &cfg, &mut sink).unwrap();
            let (_, rows) = extract(table, &mut sink).unwrap();
            let records = normalize(&rows, "https://basketball.realgm.com/nba/stats", &cfg);
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
