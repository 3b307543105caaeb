use serde::{Deserialize, Serialize};

/// Paths and naming for one adapter run. All fields are optional in the TOML
/// file; anything missing falls back to the conventional file names the
/// scraper produces next to the project root.
///
/// `images_root` is conventionally given relative to the run directory, so
/// gallery paths in the catalog come out project-relative; an absolute root
/// is relativized against its parent at indexing time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub csv_path: String,
    pub images_root: String,
    pub output_path: String,
    pub id_prefix: String,
}

impl CatalogConfig {
    pub fn from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: CatalogConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            csv_path: "Skincare _ SHISEIDO.csv".to_string(),
            images_root: "Skincare _ SHISEIDO_Images".to_string(),
            output_path: "shiseido-catalog.json".to_string(),
            id_prefix: "shiseido-".to_string(),
        }
    }
}
