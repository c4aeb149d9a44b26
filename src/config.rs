//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Externally visible address used to build short URLs
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TALLY_QUEUE_CAPACITY` - Domain tally buffer size (default: 10000, min: 100)
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="https://s.example.com"
//! ```

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme, host and optional port prepended to `/long/{key}`.
    /// Stored without a trailing slash.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Capacity of the channel between the shorten path and the tally worker.
    /// Tallies arriving while it is full are counted on the request path.
    pub tally_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Never fails today; kept fallible so callers handle future required
    /// variables the same way.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let tally_queue_capacity = env::var("TALLY_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            tally_queue_capacity,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tally_queue_capacity` is outside `100..=1_000_000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute `http(s)` URL
    pub fn validate(&self) -> Result<()> {
        if self.tally_queue_capacity < 100 {
            anyhow::bail!(
                "TALLY_QUEUE_CAPACITY must be at least 100, got {}",
                self.tally_queue_capacity
            );
        }

        if self.tally_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "TALLY_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.tally_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if url::Url::parse(&self.base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned))
            .is_none()
        {
            anyhow::bail!("BASE_URL must include a host, got '{}'", self.base_url);
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Tally queue capacity: {}", self.tally_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
