// src/core/mod.rs

pub mod doc;
pub mod net;
pub mod sanitize;
