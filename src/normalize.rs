// src/normalize.rs
//
// Key/value normalizer: canonical snake_case field names and typed cell
// values. Total by design; unparseable input degrades to text or null.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};

use crate::config::ExtractConfig;
use crate::scrape::RawRow;

/// Closed union for normalized cell values.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Null => Ok(()),
        }
    }
}

/// One normalized record. Field order is insertion order: `source` first,
/// then columns in header order. Duplicate canonical keys are kept
/// positionally (the record is an ordered field list, not a hash map).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.fields.push((key.into(), value));
    }

    /// First field with this name, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl serde::Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Canonical field name for a column header: lowercase, `%` → `_pct`,
/// every other run of non-`[a-z0-9]` becomes one underscore, underscores
/// trimmed from the ends. An empty result gets the fallback name.
pub fn canonicalize(header: &str, fallback: &str) -> String {
    let lowered = header.to_lowercase().replace('%', "_pct");

    let mut out = String::with_capacity(lowered.len());
    let mut gap = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            gap = false;
        } else if !gap {
            out.push('_');
            gap = true;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() { fallback.to_string() } else { trimmed.to_string() }
}

/// Typed value for a cell text. Empty → null; a decimal point selects a
/// float parse, otherwise integer; failed parses keep the text unchanged.
pub fn coerce(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    if text.contains('.') {
        if let Ok(f) = text.parse::<f64>() {
            return Value::Float(f);
        }
    } else if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    Value::Text(text.to_string())
}

/// Turn accepted raw rows into records tagged with their origin URL.
pub fn normalize(rows: &[RawRow], source_url: &str, cfg: &ExtractConfig) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            let mut rec = Record::default();
            rec.push("source", Value::Text(source_url.to_string()));
            for (header, cell) in row {
                rec.push(canonicalize(header, &cfg.fallback_field), coerce(cell));
            }
            rec
        })
        .collect()
}
