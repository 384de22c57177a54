use std::sync::Arc;
use crate::domain::data_stores::BlacklistStore;

// The store synchronizes internally, so no outer lock is needed
pub type BlacklistStoreType = Arc<dyn BlacklistStore>;

#[derive(Clone)]
pub struct AppState {
    pub blacklist_store: BlacklistStoreType,
}

impl AppState {
    pub fn new(blacklist_store: BlacklistStoreType) -> Self {
        Self { blacklist_store }
    }
}
