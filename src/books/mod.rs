//! The books module contains the `Book` record and the collection operations
//! the HTTP handlers are composed from.
//!
//! All operations work on a fully loaded collection. Persisting the result is
//! left to the caller, see [`crate::store`].

use serde_derive::{Deserialize, Serialize};

/// Identifier of a book, assigned by the server.
pub type BookId = u64;

/// A single book on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Unique identifier, assigned on creation
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Whether the book is currently available
    pub available: bool,
}

/// A validated book that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Whether the book is currently available
    pub available: bool,
}

/// Fields to overwrite on an existing book. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    /// New title
    pub title: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New availability
    pub available: Option<bool>,
}

impl Book {
    /// Overwrite the fields present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}

/// Next id to assign: one past the largest id on the shelf, or `1` if empty.
/// `None` once the largest id is [`BookId::MAX`].
#[must_use]
pub fn next_id(books: &[Book]) -> Option<BookId> {
    books
        .iter()
        .map(|book| book.id)
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
}

/// Append `new_book` to the collection under a freshly assigned id.
/// Returns a copy of the stored record.
///
/// # Errors
/// Errors if no id is left to assign. The collection is left untouched.
pub fn insert(books: &mut Vec<Book>, new_book: NewBook) -> anyhow::Result<Book> {
    let Some(id) = next_id(books) else {
        anyhow::bail!("no book id left to assign after {}", BookId::MAX);
    };
    let book = Book {
        id,
        title: new_book.title,
        author: new_book.author,
        available: new_book.available,
    };
    books.push(book.clone());
    Ok(book)
}

/// Books that are currently available, in shelf order.
#[must_use]
pub fn available(books: Vec<Book>) -> Vec<Book> {
    books.into_iter().filter(|book| book.available).collect()
}

/// Position of the first book with `id`.
#[must_use]
pub fn position(books: &[Book], id: BookId) -> Option<usize> {
    books.iter().position(|book| book.id == id)
}

/// Apply `patch` to the book with `id`. Returns the updated record, or `None`
/// if no such book exists (in which case the collection is untouched).
pub fn update(books: &mut [Book], id: BookId, patch: BookPatch) -> Option<Book> {
    let idx = position(books, id)?;
    let book = books.get_mut(idx)?;
    book.apply(patch);
    Some(book.clone())
}

/// Remove the book with `id`. Returns the removed record, or `None` if no
/// such book exists.
pub fn remove(books: &mut Vec<Book>, id: BookId) -> Option<Book> {
    let idx = position(books, id)?;
    Some(books.remove(idx))
}
