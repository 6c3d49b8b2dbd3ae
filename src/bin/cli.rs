// src/bin/cli.rs

use rg_scrape::{cli, runner};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = cli::parse().map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    let summary = runner::run(&params).map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    println!("Wrote {} rows to {}", summary.rows, summary.out.display());
    Ok(())
}
