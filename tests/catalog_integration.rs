use shiseido_catalog::adapter::CatalogAdapter;
use shiseido_catalog::images::ImageIndex;
use shiseido_catalog::models::Catalog;
use std::fs;
use std::path::Path;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::File::create(path).unwrap();
}

const CSV: &str = "\
Name_URL,product_title,Name,Description,Text,how_to_use,results,category,Collection,price_current,star_rating,Reviews,variants,URL_Saved_To,URL
ultimune-50,Ultimune Power Infusing Concentrate,,Strengthens skin's defenses. Boosts radiance. A 50ml bottle.,\"Ingredients: Water, Glycerin, Rice Bran Oil.\",Apply morning and night.,Visible in 4 weeks,4.7 rating,,$110.00,4.7 out of 5,\"2,315 reviews\",\"[{\"\"size\"\": \"\"50ml\"\"}]\",downloads/ultimune-front.jpg,https://cdn.example.com/ultimune-front.jpg
ultimune-50,Ultimune Power Infusing Concentrate,,,,,,,,,,,,downloads/ultimune-side.jpg,
,,Benefiance Wrinkle Smoothing Cream,Targets fine lines with deep hydration.,,,,Skincare/Moisturizers,Benefiance,$78.00,,,,,https://cdn.example.com/benefiance.jpg
,,,a row with no identity key at all,,,,,,,,,,,
";

fn run_adapter(dir: &Path) -> Catalog {
    let images_root = dir.join("downloads");
    touch(&images_root.join("ultimune-front.jpg"));
    touch(&images_root.join("gallery/ultimune-side.jpg"));

    let mut adapter = CatalogAdapter::new(ImageIndex::build(&images_root));
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(CSV.as_bytes());
    adapter.ingest(&mut reader).unwrap();
    adapter.finalize("shiseido-")
}

#[test]
fn end_to_end_catalog_from_csv_and_image_tree() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = run_adapter(dir.path());

    // Four rows, one keyless, two sharing a key: two products, name-sorted
    // with dense ids.
    assert_eq!(catalog.products.len(), 2);
    assert_eq!(catalog.products[0].id.as_deref(), Some("shiseido-1"));
    assert_eq!(
        catalog.products[0].name,
        "Benefiance Wrinkle Smoothing Cream"
    );
    assert_eq!(catalog.products[1].id.as_deref(), Some("shiseido-2"));

    let ultimune = &catalog.products[1];
    assert_eq!(ultimune.name, "Ultimune Power Infusing Concentrate");
    assert_eq!(ultimune.price, Some(110.0));
    assert_eq!(ultimune.star_rating, Some(4.7));
    assert_eq!(ultimune.reviews, Some(2315));
    assert_eq!(ultimune.size_ml, Some(50));
    assert_eq!(ultimune.collections, vec!["Ultimune"]);
    assert_eq!(ultimune.variants.len(), 1);
    assert_eq!(
        ultimune.ingredients,
        vec!["Water", "Glycerin", "Rice Bran Oil"]
    );
    assert_eq!(ultimune.how_to_use.as_deref(), Some("Apply morning and night."));
    assert_eq!(ultimune.results_timeline.as_deref(), Some("Visible in 4 weeks"));

    // Both rows contributed an image: the saved file resolved through the
    // index first, the second row's file found in a subdirectory.
    assert_eq!(ultimune.image_gallery.len(), 2);
    assert!(ultimune.image_gallery[0].ends_with("ultimune-front.jpg"));
    assert!(ultimune.image_gallery[1].ends_with("gallery/ultimune-side.jpg"));
    assert_eq!(
        ultimune.image_url.as_deref(),
        Some(ultimune.image_gallery[0].as_str())
    );

    let benefiance = &catalog.products[0];
    // Explicit Collection cell wins over inference.
    assert_eq!(benefiance.collections, vec!["Benefiance"]);
    // Slash-delimited category passes through untouched.
    assert_eq!(benefiance.category, "Skincare/Moisturizers");
    // No saved file: the raw URL lands in the gallery.
    assert_eq!(
        benefiance.image_gallery,
        vec!["https://cdn.example.com/benefiance.jpg"]
    );
}

#[test]
fn emitted_document_is_compact_and_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = run_adapter(dir.path());

    let value = serde_json::to_value(&catalog).unwrap();
    let products = value["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    for product in products {
        let map = product.as_object().unwrap();
        // Compaction: no nulls, no empty strings, no empty lists anywhere.
        for (key, field) in map {
            assert!(!field.is_null(), "null value under {key}");
            if let Some(s) = field.as_str() {
                assert!(!s.is_empty(), "empty string under {key}");
            }
            if let Some(list) = field.as_array() {
                assert!(!list.is_empty(), "empty list under {key}");
            }
        }
        assert!(!map.contains_key("tags"));
    }

    // Same inputs, second run: byte-identical serialization.
    let rerun = run_adapter(dir.path());
    assert_eq!(
        serde_json::to_string_pretty(&catalog).unwrap(),
        serde_json::to_string_pretty(&rerun).unwrap()
    );
}
