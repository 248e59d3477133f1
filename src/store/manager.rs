//! Backend selection for the state store.

use std::sync::Arc;

use crate::config::settings::{StateBackend, StateConfig};
use crate::store::{FileStateStore, MemoryStateStore, StateStore};

/// Build the state store configured in `[state]`.
pub fn create_store(config: &StateConfig) -> Arc<dyn StateStore> {
    match config.backend {
        StateBackend::File => Arc::new(FileStateStore::new(&config.directory)),
        StateBackend::Memory => Arc::new(MemoryStateStore::new()),
    }
}
