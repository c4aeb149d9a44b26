//! Deterministic short key derivation.
//!
//! A short key is the first [`SHORT_KEY_LEN`] characters of the URL-safe
//! base64 encoding of `HMAC-SHA256(KEY_SALT, long_url)`.
//!
//! # Collision Tradeoff
//!
//! Ten base64 characters carry 60 bits of the 256-bit digest. Keys stay
//! short, but by the birthday bound the chance that two distinct URLs share a
//! key reaches about 50% around 2^30 (roughly a billion) stored URLs, and is
//! around 4e-7 at one million. Collisions are not detected: a colliding URL
//! gets the key of whichever URL was stored first.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::ShortKey;
pub use crate::domain::entities::short_key::SHORT_KEY_LEN;

type HmacSha256 = Hmac<Sha256>;

/// Fixed HMAC key namespacing the hash. Not a secret.
///
/// Changing it changes every key, which breaks links handed out earlier.
pub const KEY_SALT: &[u8] = b"Hey InfraCloud!";

/// Path prefix under which short keys are resolved.
pub const SHORT_PATH_PREFIX: &str = "/long/";

/// Derives the short key for `long_url`.
///
/// Operates on the exact UTF-8 bytes of the input: no normalization, so
/// `https://a.com` and `https://a.com/` get different keys.
///
/// # Examples
///
/// ```
/// use blurb::utils::key_deriver::derive_key;
///
/// let key = derive_key("https://github.com/cheerioskun/constellation");
/// assert_eq!(key.as_str().len(), 10);
/// assert_eq!(key, derive_key("https://github.com/cheerioskun/constellation"));
/// ```
pub fn derive_key(long_url: &str) -> ShortKey {
    let mut mac = HmacSha256::new_from_slice(KEY_SALT).expect("HMAC accepts any key length");
    mac.update(long_url.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut encoded = URL_SAFE_NO_PAD.encode(digest);
    encoded.truncate(SHORT_KEY_LEN);

    ShortKey::new_unchecked(encoded)
}

/// Builds the fully qualified short URL for `key` under `base_url`.
pub fn short_url(base_url: &str, key: &ShortKey) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        SHORT_PATH_PREFIX,
        key
    )
}
