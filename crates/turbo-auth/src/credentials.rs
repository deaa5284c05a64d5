//! Credential providers.

use crate::BearerToken;
use turbo_cache::KeyValueStore;

/// Storage key the login flow writes the token under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Source of the current user's bearer token.
///
/// Reads are synchronous and may happen on every user action, so the
/// token is picked up as soon as the user logs in or out.
pub trait CredentialProvider {
    /// The current token, or `None` when the user is signed out.
    fn bearer_token(&self) -> Option<BearerToken>;
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for std::rc::Rc<P> {
    fn bearer_token(&self) -> Option<BearerToken> {
        (**self).bearer_token()
    }
}

/// Reads the token from a key-value store (browser `localStorage` in production).
#[derive(Debug)]
pub struct StoredCredentials<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoredCredentials<S> {
    /// Read the token from [`DEFAULT_TOKEN_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_TOKEN_KEY)
    }

    /// Read the token from a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> CredentialProvider for StoredCredentials<S> {
    fn bearer_token(&self) -> Option<BearerToken> {
        match self.store.get(&self.key) {
            Ok(value) => value.and_then(BearerToken::new),
            Err(e) => {
                // Unreadable storage is treated as signed out.
                tracing::warn!(key = %self.key, error = %e, "failed to read stored token");
                None
            }
        }
    }
}

/// A fixed token, or none. For server-side rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<BearerToken>,
}

impl StaticCredentials {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<BearerToken> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use turbo_cache::{CacheError, MemoryStore};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::StoreError("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("quota".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }
    }

    #[test]
    fn test_reads_token_from_default_key() {
        let creds = StoredCredentials::new(MemoryStore::with_entry("token", "abc"));
        assert_eq!(creds.bearer_token().unwrap().expose(), "abc");
    }

    #[test]
    fn test_missing_token_is_signed_out() {
        let creds = StoredCredentials::new(MemoryStore::new());
        assert!(creds.bearer_token().is_none());
    }

    #[test]
    fn test_custom_key() {
        let creds = StoredCredentials::with_key(MemoryStore::with_entry("jwt", "abc"), "jwt");
        assert_eq!(creds.key(), "jwt");
        assert!(creds.bearer_token().is_some());
    }

    #[test]
    fn test_login_is_observed_on_next_read() {
        let store = Rc::new(MemoryStore::new());
        let creds = StoredCredentials::new(store.clone());
        assert!(creds.bearer_token().is_none());

        store.set("token", "fresh").unwrap();
        assert_eq!(creds.bearer_token().unwrap().expose(), "fresh");
    }

    #[test]
    fn test_broken_store_is_signed_out() {
        let creds = StoredCredentials::new(BrokenStore);
        assert!(creds.bearer_token().is_none());
    }

    #[test]
    fn test_static_credentials() {
        assert!(StaticCredentials::signed_out().bearer_token().is_none());
        assert!(StaticCredentials::signed_in("abc").bearer_token().is_some());
    }
}
