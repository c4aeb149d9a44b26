//! # blurb
//!
//! A small, fast URL shortening service built with Axum.
//!
//! Short keys are derived deterministically from the long URL, so shortening
//! the same URL twice always yields the same link, and links computed offline
//! (see the `admin` binary) match what the server hands out. Mappings and
//! per-domain counts live in memory for the life of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the mapping store trait, tally events
//! - **Application Layer** ([`application`]) - Shorten / resolve / metrics orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /short` - `{"URL": "<long url>"}` → `{"URL": "<short url>"}`
//! - `GET /long/{key}` - `307` redirect to the long URL
//! - `GET /metrics` - top three shortened domains as `domain: count` lines
//! - `GET /health` - component health
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ServiceError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::domain::entities::{DomainTally, Link, ShortKey, ShortenedLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::domain::tally_event::TallyEvent;
    pub use crate::error::{AppError, ServiceError};
    pub use crate::infrastructure::memory::{DomainCounter, InMemoryLinkRepository};
    pub use crate::state::AppState;
    pub use crate::utils::key_deriver::derive_key;
}
