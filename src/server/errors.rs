//! Errors returned from the HTTP endpoints.
//!
//! Every error is rendered as a JSON body of the form `{"error": "<message>"}`.
use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use derive_more::Display;
use serde_derive::Serialize;

/// A request-local failure, mapped to an HTTP status code.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Required fields are missing or have the wrong type on create
    #[display(fmt = "Title, author and available (boolean) are required")]
    MissingFields,
    /// The `{id}` path segment is not an integer
    #[display(fmt = "Invalid book id")]
    InvalidId,
    /// The request body could not be read as JSON of the expected shape
    #[display(fmt = "Invalid request body: {}", _0)]
    InvalidBody(String),
    /// No book with the requested id
    #[display(fmt = "Book not found")]
    BookNotFound,
    /// No route matches the request
    #[display(fmt = "Not found")]
    RouteNotFound,
    /// Store could not be read, parsed or written. Details stay in the log.
    #[display(fmt = "Internal server error")]
    Storage(anyhow::Error),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable error message
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::MissingFields | Self::InvalidId | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::BookNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        tracing::error!("Storage error: {error:#}");
        Self::Storage(error)
    }
}

/// Turn JSON extractor failures (bad syntax, wrong field types, wrong content
/// type) into a JSON `400 Bad Request`.
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request body: {error}");
    ApiError::InvalidBody(error.to_string()).into()
}
