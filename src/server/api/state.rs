//! Centralized state management for the Actix web server
use std::sync::Arc;

use crate::store::BookStore;

/// Global, read-only state
pub trait Global {
    /// Store holding the book collection
    fn store(&self) -> &dyn BookStore;
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    /// Store holding the book collection
    pub store: Arc<dyn BookStore>,
}

impl App {
    /// Create the application state around `store`.
    pub fn new(store: impl BookStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl Global for App {
    fn store(&self) -> &dyn BookStore {
        self.store.as_ref()
    }
}
