//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for mapping storage; implementations live in
//! `crate::infrastructure::memory`. Mock implementations are auto-generated
//! via `mockall` for testing.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
