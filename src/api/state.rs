//! API server state

use std::sync::Arc;

use crate::store::DeadlineStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Record source shared across handlers
    pub store: Arc<dyn DeadlineStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DeadlineStore>) -> Self {
        Self { store }
    }
}
