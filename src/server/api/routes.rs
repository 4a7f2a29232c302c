//! A central place to register App routes.
use std::sync::Arc;

use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::books;
use super::state::Global;
use crate::server::errors::json_error_handler;

#[allow(
    clippy::literal_string_with_formatting_args,
    reason = "Actix Web resource path uses `{param}` syntax which is not formatting but route pattern matching"
)]
/// Central place to register all the App routing.
///
/// `/books/available` is registered before `/books/{id}` so it is never
/// read as an id.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<V>,
    state: &T,
) -> App<V> {
    let data_state: Arc<dyn Global> = Arc::new(state.clone());
    app.app_data(web::Data::new(data_state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/books")
                .service(
                    web::resource("")
                        .route(web::get().to(books::list))
                        .route(web::post().to(books::create)),
                )
                .service(web::resource("/available").route(web::get().to(books::list_available)))
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(books::update))
                        .route(web::delete().to(books::delete)),
                ),
        )
        .default_service(web::to(books::not_found))
}
