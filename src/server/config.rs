//! Runtime configuration of the server, fixed at start-up.
use std::path::PathBuf;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;
/// Address the server binds to. Not configurable.
pub const BIND_ADDRESS: &str = "0.0.0.0";
/// Store file used by default, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "books.json";

/// Immutable server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port to listen on
    pub port: u16,
    /// Path to the JSON store file
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}
