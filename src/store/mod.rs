//! Persistence of the book collection.
//!
//! A store always loads and saves the whole collection. There is no locking:
//! two requests racing on `load`/`save` can lose one of the writes.

use std::fmt;

use crate::books::Book;

pub mod json;
pub mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Load and save the full book collection.
pub trait BookStore: fmt::Debug + Send + Sync {
    /// Read the whole collection.
    ///
    /// # Errors
    /// Errors if the underlying storage cannot be read or parsed.
    fn load(&self) -> anyhow::Result<Vec<Book>>;

    /// Overwrite the stored collection with `books`.
    ///
    /// # Errors
    /// Errors if the underlying storage cannot be written.
    fn save(&self, books: &[Book]) -> anyhow::Result<()>;
}
