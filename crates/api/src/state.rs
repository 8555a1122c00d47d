use std::sync::Arc;

use bookshelf_core::store::BookStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// The process-wide book collection.
///
/// Reads take the shared lock; create/update/delete hold the exclusive lock
/// for the whole validate-and-mutate step.
pub type SharedBookStore = Arc<RwLock<BookStore>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory book repository.
    pub books: SharedBookStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: BookStore) -> Self {
        Self {
            books: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
