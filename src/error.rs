//! @ai:module:intent Define error types for result loading and reporting
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for result parsing, aggregation and rendering
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk result directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// File name does not follow the fixed-offset layout
    #[error("Malformed result file name {file} at bytes {start}..{end}: {message}")]
    Parse {
        file: String,
        start: usize,
        end: usize,
        message: String,
    },

    /// File contents have no readable numeric first column
    #[error("Bad data in {file}:{line}: {message}")]
    DataFormat {
        file: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Invalid result metadata: {0}")]
    InvalidMetadata(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
