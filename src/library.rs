//! Markdown library scanning — the file-system boundary.
//!
//! The core only depends on "give me (file name, text) pairs in a stable
//! order"; this module supplies that from a directory. A missing or empty
//! directory yields an empty list rather than an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A file-system failure while scanning or reading the library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One markdown file in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    file_name: String,
    path: PathBuf,
}

impl LibraryEntry {
    /// The bare file name, used as the parser's title hint.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full UTF-8 contents.
    pub fn read(&self) -> Result<String, LibraryError> {
        fs::read_to_string(&self.path).map_err(|source| LibraryError::ReadFile {
            path: self.path.clone(),
            source,
        })
    }
}

/// List the markdown files in `dir`, sorted lexicographically by file name.
///
/// Only regular files with a `.md` suffix (case-insensitive) qualify.
pub fn scan(dir: &Path) -> Result<Vec<LibraryEntry>, LibraryError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let read_dir = fs::read_dir(dir).map_err(|source| LibraryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| LibraryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.to_ascii_lowercase().ends_with(".md") {
            entries.push(LibraryEntry {
                file_name: name.to_string(),
                path,
            });
        }
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    tracing::debug!(dir = %dir.display(), count = entries.len(), "scanned library");
    Ok(entries)
}
