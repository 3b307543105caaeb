pub mod catalog_adapter;

pub use catalog_adapter::CatalogAdapter;
