//! # Session persistence
//!
//! [`SessionStore`] owns the bearer token. It is loaded once when the app starts,
//! written by the login flow, and cleared by logout and account deletion. Every other
//! part of the app only reads it.
//!
//! A missing or unreadable persisted value means "not authenticated". It is never
//! treated as a fatal error.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Bearer-token session backed by a [`KeyValueStore`].
///
/// Clones share the same in-memory token and the same backing store.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    token: Arc<Mutex<Option<String>>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            token: Arc::new(Mutex::new(None)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read the persisted token into memory and return it.
    pub async fn load(&self) -> Option<String> {
        let token = match self.store.get(TOKEN_KEY).await {
            Ok(Some(bytes)) => decode_token(bytes),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                None
            }
        };
        *self.slot() = token.clone();
        token
    }

    /// Persist `token` and mark the session authenticated.
    pub async fn set(&self, token: &str) -> Result<(), StoreError> {
        self.store
            .put(TOKEN_KEY, token.as_bytes().to_vec())
            .await?;
        *self.slot() = Some(token.to_string());
        tracing::debug!("Session token stored");
        Ok(())
    }

    /// Remove the persisted token and reset the in-memory flag.
    ///
    /// The in-memory token is cleared even when the backing store fails, so
    /// a logout always takes effect for the running process.
    pub async fn clear(&self) -> Result<(), StoreError> {
        *self.slot() = None;
        self.store.remove(TOKEN_KEY).await?;
        tracing::debug!("Session token cleared");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.slot().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.slot().is_some()
    }
}

fn decode_token(bytes: Vec<u8>) -> Option<String> {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!("Persisted session token is not UTF-8; ignoring it");
            return None;
        }
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
