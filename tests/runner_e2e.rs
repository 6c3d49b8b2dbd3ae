// tests/runner_e2e.rs
//
// Full pipeline against a saved page: file in, CSV/JSONL out.

use std::fs;
use std::path::PathBuf;

use rg_scrape::params::Params;
use rg_scrape::runner;
use rg_scrape::store::Format;

const PAGE: &str = r#"
<html><body>
<table><tr><td>nav</td></tr></table>
<table>
    <thead><tr><th></th><th>Player</th><th>FG%</th><th>3PA</th><th>Team</th></tr></thead>
    <tbody>
        <tr><td>1</td><td>LeBron James</td><td>52.3</td><td>8</td><td>LAL</td></tr>
        <tr><td colspan="5">divider</td></tr>
        <tr><td>2</td><td>Stephen Curry</td><td>48.1</td><td>10</td><td>GSW</td></tr>
    </tbody>
</table>
</body></html>
"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("rg_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn saved_page_to_csv() {
    let dir = tmp_dir("csv");
    let page = dir.join("stats.html");
    fs::write(&page, PAGE).unwrap();

    let mut params = Params::new();
    params.input = Some(page);
    params.out = Some(dir.join("stats.csv"));
    params.source = Some("https://basketball.realgm.com/nba/stats".into());
    params.preview = 0;

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.rows, 2);

    let text = fs::read_to_string(summary.out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // unlabeled leading column lands under the fallback name
    assert_eq!(lines[0], "source,rank,player,fg_pct,3pa,team");
    assert_eq!(
        lines[1],
        "https://basketball.realgm.com/nba/stats,1,LeBron James,52.3,8,LAL"
    );
    assert_eq!(
        lines[2],
        "https://basketball.realgm.com/nba/stats,2,Stephen Curry,48.1,10,GSW"
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn saved_page_to_jsonl() {
    let dir = tmp_dir("jsonl");
    let page = dir.join("stats.html");
    fs::write(&page, PAGE).unwrap();

    let mut params = Params::new();
    params.input = Some(page);
    params.out = Some(dir.join("stats.jsonl"));
    params.format = Format::Jsonl;
    params.preview = 0;

    let summary = runner::run(&params).unwrap();
    let text = fs::read_to_string(summary.out).unwrap();
    let rows: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["player"], "LeBron James");
    assert_eq!(rows[0]["fg_pct"], 52.3);
    assert_eq!(rows[0]["3pa"], 8);
    assert_eq!(rows[1]["team"], "GSW");
    // provenance defaults to the configured URL when no override is given
    assert_eq!(rows[0]["source"], rg_scrape::params::DEFAULT_URL);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn custom_markers_select_a_different_table() {
    let dir = tmp_dir("markers");
    let page = dir.join("page.html");
    fs::write(
        &page,
        r#"
        <table>
            <thead><tr><th>Player</th><th>Team</th></tr></thead>
            <tbody><tr><td>LeBron James</td><td>LAL</td></tr></tbody>
        </table>
        <table>
            <thead><tr><th>Coach</th><th>Club</th></tr></thead>
            <tbody>
                <tr><td>Steve Kerr</td><td>GSW</td></tr>
                <tr><td>JJ Redick</td><td>LAL</td></tr>
            </tbody>
        </table>
        "#,
    )
    .unwrap();

    let mut params = Params::new();
    params.input = Some(page);
    params.out = Some(dir.join("coaches.csv"));
    params.markers = Some(vec!["Coach".into(), "Club".into()]);
    params.preview = 0;

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.rows, 2);
    let text = fs::read_to_string(summary.out).unwrap();
    assert!(text.lines().next().unwrap().ends_with("coach,club"));
    assert!(text.contains("Steve Kerr"));

    let _ = fs::remove_dir_all(dir);
}
