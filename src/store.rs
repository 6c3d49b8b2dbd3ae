// src/store.rs
//
// Row-oriented persistence for normalized records. The column set comes
// from the first record, mirroring the create-table-from-sample-row scheme
// of the original store; records missing a column write an empty cell.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::normalize::{Record, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Jsonl,
}

pub fn write_records(path: &Path, records: &[Record], format: Format) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let mut w = BufWriter::new(file);
    match format {
        Format::Csv => write_csv(&mut w, records)?,
        Format::Jsonl => write_jsonl(&mut w, records)?,
    }
    w.flush()
}

fn write_csv<W: Write>(w: &mut W, records: &[Record]) -> io::Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    let columns: Vec<String> = first.iter().map(|(k, _)| k.to_string()).collect();
    write_row(w, &columns)?;

    for rec in records {
        let fields: Vec<String> = columns.iter().map(|c| csv_field(rec.get(c))).collect();
        write_row(w, &fields)?;
    }
    Ok(())
}

fn csv_field(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn write_row<W: Write>(w: &mut W, fields: &[String]) -> io::Result<()> {
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        if f.contains([',', '"', '\n', '\r']) {
            let escaped = f.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            w.write_all(f.as_bytes())?;
        }
    }
    w.write_all(b"\n")
}

fn write_jsonl<W: Write>(w: &mut W, records: &[Record]) -> io::Result<()> {
    for rec in records {
        let line = serde_json::to_string(rec).map_err(io::Error::other)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
