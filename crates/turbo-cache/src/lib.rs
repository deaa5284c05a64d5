//! Client-persistent key-value storage for TurboCommerce.
//!
//! The storefront keeps small client-side values (the auth token, for one)
//! in the browser's `localStorage`. This crate puts that behind the
//! [`KeyValueStore`] trait so callers can be exercised against an in-memory
//! store.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cache::{KeyValueStore, LocalStorage};
//!
//! let store = LocalStorage::open()?;
//! let token = store.get("token")?;
//! ```

mod error;
mod kv;

#[cfg(feature = "web")]
mod browser;

pub use error::CacheError;
pub use kv::{KeyValueStore, MemoryStore};

#[cfg(feature = "web")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, KeyValueStore, MemoryStore};
}
