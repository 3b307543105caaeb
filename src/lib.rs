//! Batch tooling around the scraped Shiseido skincare CSV: a catalog adapter
//! that derives a deduplicated JSON product catalog, plus small column
//! utilities that patch the CSV in place (see `src/bin/`).

pub mod adapter;
pub mod columns;
pub mod config;
pub mod images;
pub mod models;
pub mod processor;
