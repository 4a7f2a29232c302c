use serde_derive::Serialize;

use crate::books::Book;

/// Message returned when a book is deleted.
pub const DELETED_MESSAGE: &str = "Book deleted successfully";

/// Body of a successful `DELETE /books/{id}`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    /// Confirmation message
    pub message: &'static str,
    /// The removed book, as it was before deletion
    pub book: Book,
}

impl Deleted {
    /// Confirmation for the removal of `book`.
    #[must_use]
    pub const fn new(book: Book) -> Self {
        Self {
            message: DELETED_MESSAGE,
            book,
        }
    }
}
