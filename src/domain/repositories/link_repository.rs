//! Repository trait for short key mappings.

use crate::domain::entities::{Link, ShortKey};

/// Storage for short key to long URL mappings.
///
/// Mappings are insert-if-absent only: once a key is stored its URL never
/// changes, and nothing is ever removed. Operations are total; a store that
/// cannot satisfy them is a fatal condition, not a business error.
///
/// # Concurrency
///
/// Implementations must be safe to share across request tasks. After
/// [`put_if_absent`](Self::put_if_absent) returns, every later
/// [`get`](Self::get) for the same key observes the stored mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Stores `long_url` under `key` unless a mapping for `key` already exists.
    ///
    /// Returns the mapping held by the store afterwards, which is the
    /// pre-existing one when the key was already taken.
    fn put_if_absent(&self, key: &ShortKey, long_url: &str) -> Link;

    /// Looks up the mapping for `key`.
    fn get(&self, key: &ShortKey) -> Option<Link>;

    /// Number of stored mappings.
    fn len(&self) -> usize;

    /// Returns `true` when no mappings are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
