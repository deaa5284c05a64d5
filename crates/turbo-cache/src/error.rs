//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store is unavailable (private browsing, no window, ...).
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// A read or write against the store failed.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
