//! Strip "KEY BENEFITS" boilerplate from the `overview` and
//! `overview_summary` columns of the scraped CSV, rewriting it in place and
//! reporting how many cells changed.

use anyhow::{Context, Result};
use shiseido_catalog::processor::clean_key_benefits;
use std::env;

const DEFAULT_CSV_PATH: &str = "Skincare _ SHISEIDO.csv";
const TARGET_COLUMNS: [&str; 2] = ["overview", "overview_summary"];

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let csv_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string());
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&csv_path)
        .with_context(|| format!("Failed to open {csv_path}"))?;

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut target_indices = Vec::new();
    for column in TARGET_COLUMNS {
        match header.iter().position(|name| name == column) {
            Some(idx) => target_indices.push(idx),
            None => {
                println!("Column not found: {column}");
                return Ok(());
            }
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let mut updated = 0;
    for row in rows.iter_mut() {
        for &idx in &target_indices {
            let Some(cell) = row.get_mut(idx) else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            let cleaned = clean_key_benefits(cell);
            if cleaned != *cell {
                *cell = cleaned;
                updated += 1;
            }
        }
    }

    let mut writer =
        csv::Writer::from_path(&csv_path).with_context(|| format!("Failed to write {csv_path}"))?;
    writer.write_record(&header)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    println!("Done. Cleaned overview/overview_summary in {updated} cells.");
    Ok(())
}
