//! Handlers for the `/books` endpoints.
//!
//! Each handler loads the full collection, transforms it in memory and, for
//! mutating endpoints, saves the full collection back.
use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::books;
use crate::server::errors::ApiError;

use self::request::{parse_id, CreateBook, UpdateBook};
use self::response::Deleted;
use super::state::Global;

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Module that maps the HTTP web response to structs.
pub mod response;

/// `GET /books`: every book on the shelf.
#[tracing::instrument(name = "Listing books", skip(data))]
pub async fn list(data: web::Data<Arc<dyn Global>>) -> Result<HttpResponse, ApiError> {
    let books = data.store().load()?;
    Ok(HttpResponse::Ok().json(books))
}

/// `GET /books/available`: books with `available == true`, in shelf order.
#[tracing::instrument(name = "Listing available books", skip(data))]
pub async fn list_available(data: web::Data<Arc<dyn Global>>) -> Result<HttpResponse, ApiError> {
    let books = books::available(data.store().load()?);
    Ok(HttpResponse::Ok().json(books))
}

/// `POST /books`: validate the body, assign the next id and append the book.
#[tracing::instrument(name = "Creating book", skip(data))]
pub async fn create(
    data: web::Data<Arc<dyn Global>>,
    body: web::Json<CreateBook>,
) -> Result<HttpResponse, ApiError> {
    let new_book = body
        .into_inner()
        .validate()
        .inspect_err(|err| tracing::warn!("{err}"))?;
    let store = data.store();
    let mut shelf = store.load()?;
    let book = books::insert(&mut shelf, new_book)?;
    store.save(&shelf)?;
    tracing::info!(id = book.id, "Created book");
    Ok(HttpResponse::Created().json(book))
}

/// `PUT /books/{id}`: overwrite the fields present in the body.
#[tracing::instrument(name = "Updating book", skip(data))]
pub async fn update(
    data: web::Data<Arc<dyn Global>>,
    path: web::Path<String>,
    body: web::Json<UpdateBook>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let store = data.store();
    let mut shelf = store.load()?;
    let patch: books::BookPatch = body.into_inner().into();
    let Some(book) = id.and_then(|id| books::update(&mut shelf, id, patch)) else {
        tracing::warn!(id = path.as_str(), "Book not found");
        return Err(ApiError::BookNotFound);
    };
    store.save(&shelf)?;
    tracing::info!(id = book.id, "Updated book");
    Ok(HttpResponse::Ok().json(book))
}

/// `DELETE /books/{id}`: remove the book and echo it back.
#[tracing::instrument(name = "Deleting book", skip(data))]
pub async fn delete(
    data: web::Data<Arc<dyn Global>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let store = data.store();
    let mut shelf = store.load()?;
    let Some(book) = id.and_then(|id| books::remove(&mut shelf, id)) else {
        tracing::warn!(id = path.as_str(), "Book not found");
        return Err(ApiError::BookNotFound);
    };
    store.save(&shelf)?;
    tracing::info!(id = book.id, "Deleted book");
    Ok(HttpResponse::Ok().json(Deleted::new(book)))
}

/// Fallback for requests that match no route.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}
