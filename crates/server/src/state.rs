use std::sync::Arc;

use modelops_registry::DocumentStore;

/// Shared application state: the document-store connection handed to every
/// request handler.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> SharedState {
        Arc::new(Self { store })
    }
}
