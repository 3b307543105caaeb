pub mod column_injector;

pub use column_injector::*;
