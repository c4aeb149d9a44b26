//! Application layer services implementing business logic.
//!
//! Services orchestrate key derivation, mapping storage and domain tallies
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Shorten, resolve and metrics report

pub mod services;
