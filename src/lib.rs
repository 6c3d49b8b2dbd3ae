// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod diag;
pub mod error;
pub mod headers;
pub mod normalize;
pub mod params;
pub mod runner;
pub mod scrape;
pub mod store;
