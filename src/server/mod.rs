//! The HTTP side of the book shelf: configuration, routing, handlers and
//! request tracing.

pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod tracing;
