//! Utility functions for key derivation and URL processing.
//!
//! - [`key_deriver`] - Deterministic short key derivation
//! - [`extract_domain`] - Host extraction and validation for long URLs

pub mod extract_domain;
pub mod key_deriver;
