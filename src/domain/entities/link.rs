//! Link entity representing a stored short key mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ShortKey;

/// A stored mapping from a short key to the original long URL.
///
/// Created on the first shorten request for a URL and never modified
/// afterwards. `long_url` is kept byte-for-byte as the caller sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub key: ShortKey,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(key: ShortKey, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            key,
            long_url,
            created_at,
        }
    }
}

/// Result of a successful shorten request.
#[derive(Debug, Clone)]
pub struct ShortenedLink {
    pub link: Link,
    /// Fully qualified short URL (base address + path prefix + key).
    pub short_url: String,
}
