//! Serve the book shelf over HTTP.
#![allow(clippy::module_name_repetitions)]
use std::io;

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use super::api::routes;
use super::api::state::{App as AppState, Global};
use super::config::{Config, BIND_ADDRESS};
use super::tracing::BookshelfRootSpanBuilder;
use crate::store::JsonFileStore;

/// Serve the books kept in the store file named by `config`.
///
/// # Errors
/// Will error if the server cannot bind to the configured address.
#[actix_web::main]
pub async fn serve_books(config: Config) -> io::Result<()> {
    let store = JsonFileStore::new(&config.store_path);
    tracing::info!(
        "Serving books from '{}' on http://{}:{}.",
        store.path().display(),
        BIND_ADDRESS,
        config.port
    );
    let state = AppState::new(store);

    HttpServer::new(move || init_app(&state))
        .bind((BIND_ADDRESS, config.port))?
        .run()
        .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new().wrap(TracingLogger::<BookshelfRootSpanBuilder>::new());
    routes::register_app(app, state)
}
