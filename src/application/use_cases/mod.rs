pub mod manifest_operations;

pub use manifest_operations::*;
