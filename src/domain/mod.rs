//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Mapping storage trait definitions
//! - [`tally_event`] - Domain tally event model
//! - [`tally_worker`] - Background worker applying tallies to the domain counter
//!
//! # Tally Processing Flow
//!
//! 1. A shorten request is served by [`crate::application::services::ShortenService`]
//! 2. A [`tally_event::TallyEvent`] for the URL's host is sent to a bounded channel
//! 3. [`tally_worker::run_tally_worker`] drains the channel in FIFO order
//! 4. Each event increments [`crate::infrastructure::memory::DomainCounter`]

pub mod entities;
pub mod repositories;
pub mod tally_event;
pub mod tally_worker;
