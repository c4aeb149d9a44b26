//! Validated short key newtype.

use serde::Serialize;
use std::fmt;

/// Number of characters in every short key.
pub const SHORT_KEY_LEN: usize = 10;

/// A short key identifying a stored [`crate::domain::entities::Link`].
///
/// Keys are exactly [`SHORT_KEY_LEN`] characters from the URL-safe base64
/// alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`). Keys produced by
/// [`crate::utils::key_deriver::derive_key`] always satisfy this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortKey(String);

impl ShortKey {
    /// Parses a caller-supplied key, returning `None` if it cannot have been
    /// produced by the key deriver.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == SHORT_KEY_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

        well_formed.then(|| Self(raw.to_string()))
    }

    /// Wraps a key without validation.
    ///
    /// Only for keys coming out of the key deriver.
    pub(crate) fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
