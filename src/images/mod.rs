pub mod image_index;

pub use image_index::ImageIndex;
