//! Inject a synthetic `Promotions` column into the scraped CSV, picking one
//! of the promotion strings uniformly at random for each row. A no-op when
//! the column is already present.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use shiseido_catalog::columns::{PROMOTIONS, has_column};
use std::env;

const DEFAULT_CSV_PATH: &str = "Skincare _ SHISEIDO.csv";
const COLUMN_NAME: &str = "Promotions";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let csv_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string());
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&csv_path)
        .with_context(|| format!("Failed to open {csv_path}"))?;

    let mut header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() {
        println!("CSV is empty");
        return Ok(());
    }
    if has_column(&header, COLUMN_NAME) {
        println!("{COLUMN_NAME} column already exists");
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    header.push(COLUMN_NAME.to_string());
    let mut rng = rand::thread_rng();
    for row in rows.iter_mut() {
        while row.len() < header.len() - 1 {
            row.push(String::new());
        }
        let promotion = PROMOTIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or_default()
            .to_string();
        row.push(promotion);
    }

    let mut writer =
        csv::Writer::from_path(&csv_path).with_context(|| format!("Failed to write {csv_path}"))?;
    writer.write_record(&header)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    println!(
        "Added {COLUMN_NAME} column with randomized values across {} rows",
        rows.len()
    );
    Ok(())
}
