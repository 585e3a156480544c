//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::services::account_store::AccountStore;

/// State cloned into every request via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,

    /// Upper bound applied to `limit` on list requests
    pub max_page_size: i64,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, max_page_size: i64) -> Self {
        Self {
            store,
            max_page_size,
        }
    }
}
