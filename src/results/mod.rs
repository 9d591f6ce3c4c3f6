//! @ai:module:intent Result file naming and loading
//! @ai:module:layer infrastructure
//! @ai:module:public_api FileMetadata, ResultFile, ResultLoader, parse_file_name, canonical_file_name

pub mod filename;
pub mod loader;

pub use filename::{canonical_file_name, parse_file_name, weight_label, FileMetadata};
pub use loader::{parse_values, ResultFile, ResultLoader, ResultLoaderTrait};
