//! Access-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signup flow writes the issued token through a `TokenStore` instead of
//! reaching for `localStorage` directly. The browser build uses
//! [`LocalStorageTokenStore`]; tests and non-browser builds use
//! [`MemoryTokenStore`].

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key the access token is written under.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
}

/// Key-value persistence for the access token.
pub trait TokenStore {
    /// Persists `token` under [`TOKEN_KEY`].
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be written.
    fn save_token(&self, token: &str) -> Result<(), StorageError>;

    /// Reads the token previously saved, if any.
    fn load_token(&self) -> Option<String>;
}

/// `window.localStorage`, the durable store used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|_| StorageError::Write {
                    key: TOKEN_KEY.to_owned(),
                })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn load_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup by key.
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Write {
            key: TOKEN_KEY.to_owned(),
        })?;
        entries.insert(TOKEN_KEY.to_owned(), token.to_owned());
        Ok(())
    }

    fn load_token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }
}
