//! @ai:module:intent Load experiment result files from a directory tree
//! @ai:module:layer infrastructure
//! @ai:module:public_api ResultFile, ResultLoader, ResultLoaderTrait, parse_values
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::results::filename::{parse_file_name, FileMetadata};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent One parsed result file: its name metadata and first-column values
#[derive(Debug, Clone)]
pub struct ResultFile {
    pub path: PathBuf,
    pub metadata: FileMetadata,
    pub values: Vec<f64>,
}

/// @ai:intent Trait for loading result files
pub trait ResultLoaderTrait: Send + Sync {
    /// @ai:intent Load every file under the root directory
    fn load_all(&self, root: &Path) -> Result<Vec<ResultFile>>;
}

/// @ai:intent Loads whitespace-delimited result files named by the fixed-offset layout
pub struct ResultLoader;

impl ResultLoader {
    /// @ai:intent Create a new result loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Find all files under root, sorted by name within each directory
    /// @ai:effects fs:read
    fn find_result_files(root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// @ai:intent Parse a single result file
    /// @ai:effects fs:read
    fn parse_result_file(path: &Path) -> Result<ResultFile> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = parse_file_name(&name)?;

        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let values = parse_values(&content, path)?;

        Ok(ResultFile {
            path: path.to_path_buf(),
            metadata,
            values,
        })
    }
}

impl Default for ResultLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultLoaderTrait for ResultLoader {
    /// @ai:intent Load every result file; the first failure aborts the load
    /// @ai:effects fs:read
    fn load_all(&self, root: &Path) -> Result<Vec<ResultFile>> {
        let paths = Self::find_result_files(root)?;
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            let file = Self::parse_result_file(&path)?;
            tracing::debug!("Loaded {} values from {}", file.values.len(), path.display());
            files.push(file);
        }

        if files.is_empty() {
            tracing::warn!("No result files found under {}", root.display());
        }

        Ok(files)
    }
}

/// @ai:intent Read the first whitespace-delimited column as objective values
/// @ai:pre content is the full text of one result file
/// @ai:post a non-numeric first line is skipped as a header; every other line must be a finite number
/// @ai:effects pure
pub fn parse_values(content: &str, path: &Path) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut seen_line = false;

    for (index, line) in content.lines().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        let first = !seen_line;
        seen_line = true;

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            Ok(_) => {
                return Err(Error::DataFormat {
                    file: path.to_path_buf(),
                    line: index + 1,
                    message: format!("first column {:?} is not a finite number", token),
                });
            }
            Err(_) if first => {
                tracing::debug!("Skipping header line in {}", path.display());
            }
            Err(_) => {
                return Err(Error::DataFormat {
                    file: path.to_path_buf(),
                    line: index + 1,
                    message: format!("first column {:?} is not a number", token),
                });
            }
        }
    }

    if values.is_empty() {
        return Err(Error::DataFormat {
            file: path.to_path_buf(),
            line: 0,
            message: "no numeric values in the first column".to_string(),
        });
    }

    Ok(values)
}
