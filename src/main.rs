use anyhow::{Context, Result};
use shiseido_catalog::adapter::CatalogAdapter;
use shiseido_catalog::config::CatalogConfig;
use shiseido_catalog::images::ImageIndex;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Optional first argument: path to a TOML config overriding the
    // conventional file names.
    let config = match env::args().nth(1) {
        Some(path) => CatalogConfig::from_file(&path)
            .with_context(|| format!("Failed to load catalog configuration from {path}"))?,
        None => CatalogConfig::default(),
    };

    info!("Indexing images under {}", config.images_root);
    let image_index = ImageIndex::build(Path::new(&config.images_root));
    info!("Indexed {} image files", image_index.len());

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&config.csv_path)
        .with_context(|| format!("Failed to open input table {}", config.csv_path))?;

    let mut adapter = CatalogAdapter::new(image_index);
    adapter
        .ingest(&mut reader)
        .with_context(|| format!("Failed while reading {}", config.csv_path))?;
    if adapter.skipped_rows() > 0 {
        warn!(
            "Skipped {} rows without a usable identity key",
            adapter.skipped_rows()
        );
    }

    let catalog = adapter.finalize(&config.id_prefix);
    let json = serde_json::to_string_pretty(&catalog)?;
    fs::write(&config.output_path, json)
        .with_context(|| format!("Failed to write {}", config.output_path))?;

    println!(
        "Wrote {} products to {}",
        catalog.products.len(),
        config.output_path
    );
    Ok(())
}
