//! # Key-value persistence
//!
//! [`KeyValueStore`] is the seam between GlideMate's persisted local state and the
//! medium that holds it. Only one key is written today (the bearer token, see
//! [`crate::session`]), but the trait is string-keyed so that other small values can be
//! kept alongside it.
//!
//! Implementations:
//!
//! | Type | Backing |
//! |------|---------|
//! | [`crate::FileStore`] | one file per key under a base directory (desktop and mobile) |
//! | [`crate::MemoryStore`] | process memory (tests, previews) |

use crate::error::StoreError;

/// Async trait for reading and writing small string-keyed blobs.
pub trait KeyValueStore {
    /// Read the raw bytes stored under `key`. `Ok(None)` means the key is absent.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>, StoreError>>;
    fn put(
        &self,
        key: &str,
        value: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
