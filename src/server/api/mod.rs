//! This module contains the API endpoints for the server.
#![allow(
    // Unused asyncs are the norm in Actix route definition files
    clippy::unused_async
)]
pub mod books;
pub mod routes;
pub mod state;
