//! Last-seen state storage with swappable backends.
//!
//! The pipeline only talks to the `StateStore` trait. Two backends exist:
//! - File store (default): one newline-delimited text file per key
//! - Memory store: process-local, used by tests and throwaway runs
//!
//! # Configuration
//!
//! ```toml
//! [state]
//! backend = "file"   # or "memory"
//! directory = "."
//! ```

mod error;
mod file;
mod manager;
mod memory;
mod traits;

pub use error::StoreError;
pub use file::FileStateStore;
pub use manager::create_store;
pub use memory::MemoryStateStore;
pub use traits::StateStore;

pub use crate::config::settings::{StateBackend, StateConfig};
