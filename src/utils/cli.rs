//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::serve_books;
use crate::server::config::{Config, DEFAULT_PORT, DEFAULT_STORE_PATH};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bookshelf serves a collection of book records, kept in a single
/// JSON file, over a small HTTP API.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port on which to serve the API.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Path to the JSON file holding the books. Created if missing.
    #[arg(short, long, env = "BOOKSHELF_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            store_path: cli.store,
        }
    }
}

/// Log to stdout, `info` and above unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main entrypoint to application
pub fn run() {
    init_tracing();
    tracing::debug!("Starting application");
    let config = Config::from(Cli::parse());
    if let Err(err) = serve_books(config) {
        tracing::error!("Unable to serve books: {err}");
        std::process::exit(1);
    }
}
