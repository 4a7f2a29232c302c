use serde_derive::Deserialize;
use serde_json::Value;

use crate::books::{BookId, BookPatch, NewBook};
use crate::server::errors::ApiError;

/// Body of `POST /books`.
///
/// Fields are kept as raw JSON so that presence and type can be checked
/// explicitly in [`CreateBook::validate`].
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    /// Title, must be a non-empty string
    pub title: Option<Value>,
    /// Author, must be a non-empty string
    pub author: Option<Value>,
    /// Availability, must be a JSON boolean
    pub available: Option<Value>,
}

impl CreateBook {
    /// Check the body and turn it into a [`NewBook`].
    ///
    /// # Errors
    /// Errors if `title` or `author` is not a non-empty string, or if
    /// `available` is not a boolean.
    pub fn validate(self) -> Result<NewBook, ApiError> {
        match (self.title, self.author, self.available) {
            (Some(Value::String(title)), Some(Value::String(author)), Some(Value::Bool(available)))
                if !title.is_empty() && !author.is_empty() =>
            {
                Ok(NewBook {
                    title,
                    author,
                    available,
                })
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// Body of `PUT /books/{id}`. Absent (or `null`) fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBook {
    /// New title
    pub title: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New availability
    pub available: Option<bool>,
}

impl From<UpdateBook> for BookPatch {
    fn from(body: UpdateBook) -> Self {
        Self {
            title: body.title,
            author: body.author,
            available: body.available,
        }
    }
}

/// Parse the `{id}` path segment.
///
/// Any integer is accepted. Integers no book can carry (negative, or larger
/// than [`BookId::MAX`]) come back as `None` and match nothing.
///
/// # Errors
/// Errors if `raw` is not an integer.
pub fn parse_id(raw: &str) -> Result<Option<BookId>, ApiError> {
    let digits = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::InvalidId);
    }
    Ok(raw.parse().ok())
}
