//! Domain extraction from long URLs.

use url::Url;

use crate::error::ServiceError;

/// Parses `long_url` and returns its host, the key used for domain tallies.
///
/// The host comes back as normalized by the `url` crate: lowercase for
/// special schemes, IDNA-encoded for internationalized names, IPv6 in
/// brackets. Ports are not part of the domain.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidInput`] if:
/// - `long_url` contains ASCII control characters or has leading or trailing
///   whitespace, which the parser would otherwise strip silently
/// - `long_url` is not an absolute URL
/// - the URL has no host (e.g., `mailto:` or `data:` URLs)
///
/// # Examples
///
/// ```
/// use blurb::utils::extract_domain::extract_domain;
///
/// assert_eq!(extract_domain("https://GitHub.com:443/a").unwrap(), "github.com");
/// assert!(extract_domain("not-a-url").is_err());
/// assert!(extract_domain("https://example.com/a\nb").is_err());
/// ```
pub fn extract_domain(long_url: &str) -> Result<String, ServiceError> {
    if long_url.bytes().any(|b| b.is_ascii_control()) {
        return Err(ServiceError::InvalidInput {
            url: long_url.to_string(),
            reason: "URL contains control characters".to_string(),
        });
    }

    if long_url.trim() != long_url {
        return Err(ServiceError::InvalidInput {
            url: long_url.to_string(),
            reason: "URL has leading or trailing whitespace".to_string(),
        });
    }

    let parsed = Url::parse(long_url).map_err(|e| ServiceError::InvalidInput {
        url: long_url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(ServiceError::InvalidInput {
            url: long_url.to_string(),
            reason: "URL has no host".to_string(),
        }),
    }
}
