use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::model::Snippet;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct SnippetStore {
    path: PathBuf,
}

impl SnippetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted collection. A missing, unreadable, or corrupt file reads as empty.
    pub fn list(&self) -> Vec<Snippet> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                log::warn!("reading {} failed, treating as empty: {error}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Snippet>>(&raw) {
            Ok(snippets) => snippets,
            Err(error) => {
                log::warn!("{} is not a snippet list, treating as empty: {error}", self.path.display());
                Vec::new()
            }
        }
    }

    pub fn replace_all(&self, snippets: &[Snippet]) -> Result<(), StoreError> {
        write_json_atomic(&self.path, snippets)
    }
}

/// Writes pretty JSON to a sibling temp file, then renames it over `path`.
/// On failure the previous file is left in place.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let io_error = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let encoded = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_error)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(io_error)?;
    temp.write_all(encoded.as_bytes()).map_err(io_error)?;
    temp.flush().map_err(io_error)?;
    temp.persist(path).map_err(|error| io_error(error.error))?;
    Ok(())
}
