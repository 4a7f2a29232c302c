//! # Bookshelf
//!
//! Bookshelf is a small HTTP service for keeping a collection of book
//! records. The whole collection lives in one pretty-printed JSON file that
//! is read on every request and rewritten on every change.
//!
//! ## Endpoints
//!
//! - `GET /books` lists every book
//! - `GET /books/available` lists the books that are available
//! - `POST /books` adds a book
//! - `PUT /books/{id}` changes some fields of a book
//! - `DELETE /books/{id}` removes a book

// Lints for the whole crate. We opt into pedantic, nursery, cargo and restriction groups as
// warnings during development; CI turns warnings into errors.
#![warn(
    clippy::all,
    missing_docs,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    reason = "Restriction lints are opted into as a group and allowed one by one below."
)]
#![warn(clippy::restriction)]
//
// Restriction lints that do not fit this crate.
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::multiple_crate_versions,
    reason = "actix and tracing pull in several versions of the same small crates"
)]
#![allow(
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    reason = "We're not interested in becoming no-std compatible"
)]
#![allow(
    clippy::mod_module_files,
    reason = "mod.rs is the layout used across the crate"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Request handling is dominated by file I/O, not call overhead"
)]
#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "The crate is an application; its types are not a stable library API"
)]
#![allow(
    clippy::question_mark_used,
    reason = "We rely on propagating errors with question mark extensively"
)]
#![allow(
    clippy::semicolon_outside_block,
    reason = "Opt in to have semicolon in the outside block across codebase"
)]
#![allow(
    clippy::single_call_fn,
    reason = "Handlers and setup are split into small functions called once"
)]
#![allow(
    clippy::arbitrary_source_item_ordering,
    reason = "Items are ordered by reading flow, not alphabetically"
)]

pub mod books;
pub mod server;
pub mod store;
pub mod utils;
