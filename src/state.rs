use std::sync::Arc;

use crate::database::DocumentStore;

/// Shared application context, built once at startup and handed to every
/// handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
