// src/cli.rs

use std::{env, path::PathBuf};

use crate::params::Params;
use crate::store::Format;

pub fn parse() -> Result<Params, Box<dyn std::error::Error>> {
    parse_from(env::args().skip(1))
}

fn parse_from(mut args: impl Iterator<Item = String>) -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "-f" | "--file" => {
                params.input = Some(PathBuf::from(args.next().ok_or("Missing value for --file")?));
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Format::Csv,
                    "jsonl" => Format::Jsonl,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--source" => params.source = Some(args.next().ok_or("Missing value for --source")?),
            "--markers" => {
                let v = args.next().ok_or("Missing value for --markers")?;
                params.markers = Some(parse_markers(&v)?);
            }
            "--retries" => params.retries = args.next().ok_or("Missing value for --retries")?.parse()?,
            "--preview" => params.preview = args.next().ok_or("Missing value for --preview")?.parse()?,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn parse_markers(s: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let out: Vec<String> = s
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();
    if out.is_empty() {
        return Err("--markers needs at least one column name".into());
    }
    Ok(out)
}
