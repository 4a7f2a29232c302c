//! Store the book collection as a pretty-printed JSON array in a single file.

use std::fs::{create_dir_all, read_to_string, write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use super::BookStore;
use crate::books::Book;

/// A [`BookStore`] backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the store file
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file is not touched until
    /// the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `books` to the store file, creating parent directories as needed.
    fn write_books(&self, books: &[Book]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).with_context(|| {
                    format!("could not create directory '{}'", parent.display())
                })?;
            }
        }
        let content = serde_json::to_string_pretty(books)?;
        write(&self.path, content)
            .with_context(|| format!("could not write store '{}'", self.path.display()))?;
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Vec<Book>> {
        if !self.path.exists() {
            tracing::info!("Initializing empty store at '{}'", self.path.display());
            self.write_books(&[])?;
            return Ok(Vec::new());
        }
        let content = read_to_string(&self.path)
            .with_context(|| format!("could not read store '{}'", self.path.display()))?;
        let books: Vec<Book> = serde_json::from_str(&content)
            .with_context(|| format!("could not parse store '{}'", self.path.display()))?;
        tracing::debug!(count = books.len(), "Loaded books");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> anyhow::Result<()> {
        self.write_books(books)?;
        tracing::debug!(count = books.len(), "Saved books");
        Ok(())
    }
}
