//! Persistent key-value store for the visitor's preferences.
//!
//! The site only ever stores the chosen locale, but the store is keyed so
//! the storage key stays configurable.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Origin-scoped string store (the browser's `localStorage` equivalent).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
