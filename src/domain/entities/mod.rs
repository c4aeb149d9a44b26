//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortKey`] - Fixed-length, URL-safe identifier derived from a long URL
//! - [`Link`] - A stored short key to long URL mapping
//! - [`DomainTally`] - How many shorten requests a domain has received

pub mod domain_tally;
pub mod link;
pub mod short_key;

pub use domain_tally::DomainTally;
pub use link::{Link, ShortenedLink};
pub use short_key::ShortKey;
