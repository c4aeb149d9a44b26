//! In-memory stores shared by all request tasks.
//!
//! - [`InMemoryLinkRepository`] - short key to long URL mappings
//! - [`DomainCounter`] - per-domain shorten counts with a ranked read

mod domain_counter;
mod link_repository;

pub use domain_counter::DomainCounter;
pub use link_repository::InMemoryLinkRepository;
