pub mod boilerplate;
pub mod field_parser;
pub mod product_classifier;
pub mod text_normalizer;

pub use boilerplate::*;
pub use field_parser::*;
pub use product_classifier::*;
pub use text_normalizer::*;
