// src/scrape/mod.rs

mod extract;
mod locate;

pub use extract::{RawRow, extract};
pub use locate::locate;
