use anyhow::Result;
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::images::ImageIndex;
use crate::models::{Catalog, Product};
use crate::processor::{
    ProductClassifier, extract_features, extract_ingredients, extract_size_ml, extract_spf,
    normalize_block, normalize_inline, parse_price, parse_rating, parse_review_count,
    parse_variants,
};

/// One CSV record with header-indexed access. Missing columns read as empty,
/// so input files may carry any subset of the known columns.
struct RawRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl RawRow<'_> {
    fn get(&self, column: &str) -> &str {
        self.columns
            .get(column)
            .and_then(|&idx| self.record.get(idx))
            .unwrap_or("")
    }

    /// Raw value of the first non-empty column among the given names.
    fn first_of(&self, columns: &[&str]) -> &str {
        columns
            .iter()
            .map(|column| self.get(column))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

/// Single-pass accumulator from CSV rows to deduplicated products.
///
/// Rows sharing an identity key (normalized `Name_URL`, or the product name
/// as fallback) merge into one product. The first row for a key builds the
/// full record and runs classification once; later rows only fill scalar
/// fields that are still absent. Images are the exception: every row may
/// append to the gallery.
pub struct CatalogAdapter {
    classifier: ProductClassifier,
    image_index: ImageIndex,
    products: Vec<Product>,
    index_by_key: HashMap<String, usize>,
    skipped_rows: usize,
}

impl CatalogAdapter {
    pub fn new(image_index: ImageIndex) -> Self {
        CatalogAdapter {
            classifier: ProductClassifier::new(),
            image_index,
            products: Vec::new(),
            index_by_key: HashMap::new(),
            skipped_rows: 0,
        }
    }

    /// Consume every record of the reader in file order. Only I/O and CSV
    /// framing errors propagate; per-field parse failures degrade to absent
    /// values.
    pub fn ingest<R: Read>(&mut self, reader: &mut csv::Reader<R>) -> Result<usize> {
        let columns: HashMap<String, usize> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), idx))
            .collect();

        let mut row_count = 0;
        for result in reader.records() {
            let record = result?;
            self.ingest_row(&RawRow {
                columns: &columns,
                record: &record,
            });
            row_count += 1;
        }
        info!(
            "Ingested {} rows into {} products ({} skipped without identity key)",
            row_count,
            self.products.len(),
            self.skipped_rows
        );
        Ok(row_count)
    }

    fn ingest_row(&mut self, row: &RawRow) {
        let name_url = normalize_inline(row.get("Name_URL"));
        let name = normalize_inline(row.first_of(&["product_title", "Name"]));
        let description = normalize_block(row.get("Description"));
        let composition = normalize_block(row.get("Text"));
        let how_to_use = normalize_block(row.get("how_to_use"));
        let results_timeline = normalize_inline(row.get("results"));
        let category = normalize_inline(row.first_of(&["category", "Category"]));
        let collection = normalize_inline(row.get("Collection"));
        let price = parse_price(row.get("price_current"));
        let star_rating = parse_rating(row.get("star_rating"));
        let reviews = parse_review_count(row.get("Reviews"));
        let variants = parse_variants(row.get("variants"));

        let key = if name_url.is_empty() { &name } else { &name_url };
        if key.is_empty() {
            self.skipped_rows += 1;
            debug!("Skipping row without Name_URL or product name");
            return;
        }

        let idx = match self.index_by_key.get(key) {
            Some(&idx) => {
                // Non-destructive merge: only fill what the first row left
                // absent. Classification and list fields never recompute.
                let product = &mut self.products[idx];
                if product.description.is_none() && !description.is_empty() {
                    product.description = Some(normalize_inline(&description));
                }
                if product.price.is_none() {
                    product.price = price;
                }
                if product.star_rating.is_none() {
                    product.star_rating = star_rating;
                }
                if product.reviews.is_none() {
                    product.reviews = reviews;
                }
                if product.how_to_use.is_none() && !how_to_use.is_empty() {
                    product.how_to_use = Some(how_to_use);
                }
                if product.results_timeline.is_none() && !results_timeline.is_empty() {
                    product.results_timeline = Some(results_timeline);
                }
                idx
            }
            None => {
                let product_type = self.classifier.infer_product_type(&name);
                let category_label = self.classifier.normalize_category(&category, product_type);
                let combined_text = join_non_empty(&[&name, &description, &composition]);

                let product = Product {
                    id: None,
                    name: name.clone(),
                    category: category_label.clone(),
                    product_type: product_type.to_string(),
                    price,
                    star_rating,
                    reviews,
                    description: non_empty(normalize_inline(&description)),
                    composition: non_empty(composition.clone()),
                    ingredients: extract_ingredients(&composition),
                    how_to_use: non_empty(how_to_use),
                    results_timeline: non_empty(results_timeline),
                    variants,
                    features: extract_features(&description, &composition),
                    benefits: self.classifier.infer_benefits(&combined_text),
                    collections: if collection.is_empty() {
                        self.classifier.infer_collections(&combined_text)
                    } else {
                        vec![collection]
                    },
                    concerns: self.classifier.infer_concerns(&combined_text),
                    categories: self.classifier.infer_shop_categories(
                        &name,
                        &normalize_inline(&description),
                        &category_label,
                        product_type,
                    ),
                    spf: extract_spf(&combined_text),
                    size_ml: extract_size_ml(&combined_text),
                    image_url: None,
                    image_gallery: Vec::new(),
                    tags: Vec::new(),
                };
                let idx = self.products.len();
                self.products.push(product);
                self.index_by_key.insert(key.clone(), idx);
                idx
            }
        };

        // Images accumulate on every row, new key or not: prefer the locally
        // saved file (looked up by base-name), fall back to the raw URL.
        if let Some(image_path) = self.resolve_image(row) {
            let product = &mut self.products[idx];
            if !product.image_gallery.contains(&image_path) {
                product.image_gallery.push(image_path.clone());
            }
            if product.image_url.is_none() {
                product.image_url = Some(image_path);
            }
        }
    }

    fn resolve_image(&self, row: &RawRow) -> Option<String> {
        let saved_to = normalize_inline(row.get("URL_Saved_To"));
        if !saved_to.is_empty() {
            let base_name = Path::new(&saved_to)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            if let Some(path) = base_name.and_then(|n| self.image_index.lookup(&n)) {
                return Some(path.to_string());
            }
        }
        non_empty(normalize_inline(row.get("URL")))
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Sort by name (stable, so products sharing a name keep file order),
    /// assign dense 1-based ids, and wrap as the output document.
    pub fn finalize(mut self, id_prefix: &str) -> Catalog {
        self.products.sort_by(|a, b| a.name.cmp(&b.name));
        for (idx, product) in self.products.iter_mut().enumerate() {
            product.id = Some(format!("{}{}", id_prefix, idx + 1));
        }
        Catalog {
            products: self.products,
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
