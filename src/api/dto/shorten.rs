//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The field is named `URL` on the wire; lowercase `url` is accepted too.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Must have a scheme and a host.
    #[serde(rename = "URL", alias = "url")]
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response carrying the fully qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "URL")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_both_field_names() {
        let upper: ShortenRequest = serde_json::from_str(r#"{"URL":"https://a.com"}"#).unwrap();
        let lower: ShortenRequest = serde_json::from_str(r#"{"url":"https://a.com"}"#).unwrap();

        assert_eq!(upper.url, "https://a.com");
        assert_eq!(lower.url, "https://a.com");
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest { url: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_field_name() {
        let response = ShortenResponse {
            url: "http://localhost:3000/long/abcdefghij".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "URL": "http://localhost:3000/long/abcdefghij" })
        );
    }
}
