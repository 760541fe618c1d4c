//! Credential token persistence.
//!
//! The access/refresh token pair lives in `localStorage` under namespaced
//! keys and is owned exclusively by this module: the rest of the crate goes
//! through [`TokenStore`] and never touches the raw keys. A pair is written
//! and removed as a unit; a half-written pair reads back as no pair, since a
//! lone token cannot produce a valid authorization header or a refresh path.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::collections::HashMap;

pub const ACCESS_TOKEN_KEY: &str = "fintrack_access_token";
pub const REFRESH_TOKEN_KEY: &str = "fintrack_refresh_token";

/// The persisted credential pair.
///
/// Both fields are opaque strings minted by the server. The refresh token is
/// stored for a future refresh flow; nothing reads it yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Key-value backing medium for the token store.
///
/// `LocalStorage` is the browser implementation; [`MemoryBackend`] backs
/// tests and server-side rendering, where no durable storage exists.
pub trait TokenBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// Token store over a backing medium.
pub struct TokenStore<B> {
    backend: B,
}

impl<B: TokenBackend> TokenStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist both tokens.
    pub fn save(&mut self, tokens: &TokenPair) {
        self.backend.write(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.backend.write(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    }

    /// Load the pair, or `None` unless both fields are present.
    pub fn load(&self) -> Option<TokenPair> {
        let access_token = self.backend.read(ACCESS_TOKEN_KEY)?;
        let refresh_token = self.backend.read(REFRESH_TOKEN_KEY)?;
        Some(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Remove both tokens. Safe to call when nothing is stored.
    pub fn clear(&mut self) {
        self.backend.delete(ACCESS_TOKEN_KEY);
        self.backend.delete(REFRESH_TOKEN_KEY);
    }
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl TokenBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `localStorage`-backed token storage. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl TokenBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(key).ok()?
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    fn delete(&mut self, key: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}
