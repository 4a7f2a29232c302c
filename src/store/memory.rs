//! In-memory book store, mostly useful for tests.

use std::sync::RwLock;

use super::BookStore;
use crate::books::Book;

/// A [`BookStore`] that keeps the collection in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// The stored collection
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    /// Create a store pre-filled with `books`.
    #[must_use]
    pub const fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Vec<Book>> {
        let books = self
            .books
            .read()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(books.clone())
    }

    fn save(&self, books: &[Book]) -> anyhow::Result<()> {
        let mut stored = self
            .books
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        *stored = books.to_vec();
        Ok(())
    }
}
