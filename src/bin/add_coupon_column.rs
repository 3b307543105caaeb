//! Inject a synthetic `Coupon_Applicable` column into the scraped CSV with a
//! fixed randomized distribution: SAVE10 50%, SAVE15 25%, SAVE20 15%, blank
//! for the remainder.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use shiseido_catalog::columns::{COUPON_DISTRIBUTION, allocate_bucket_counts, bucket_values, has_column};
use std::env;

const DEFAULT_CSV_PATH: &str = "Skincare _ SHISEIDO.csv";
const COLUMN_NAME: &str = "Coupon_Applicable";

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
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let n = rows.len();
    if n == 0 {
        println!("No data rows found.");
        return Ok(());
    }
    if has_column(&header, COLUMN_NAME) {
        println!("{COLUMN_NAME} column already exists");
        return Ok(());
    }

    let counts = allocate_bucket_counts(n, &COUPON_DISTRIBUTION);
    let mut values = bucket_values(&counts);
    values.shuffle(&mut rand::thread_rng());

    header.push(COLUMN_NAME.to_string());
    for (idx, row) in rows.iter_mut().enumerate() {
        // Pad short rows so the new column lands in the right position.
        while row.len() < header.len() - 1 {
            row.push(String::new());
        }
        row.push(values.get(idx).copied().unwrap_or_default().to_string());
    }

    let mut writer =
        csv::Writer::from_path(&csv_path).with_context(|| format!("Failed to write {csv_path}"))?;
    writer.write_record(&header)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    println!("Added column '{COLUMN_NAME}' to {csv_path}");
    println!("Total data rows: {n}");
    for (code, count) in &counts {
        let label = if code.is_empty() {
            "(blank)".to_string()
        } else {
            format!("'{code}'")
        };
        println!(
            "  {label}: {count} ({:.1}%)",
            100.0 * *count as f64 / n as f64
        );
    }
    Ok(())
}
