//! Infrastructure layer implementing domain storage traits.
//!
//! # Modules
//!
//! - [`memory`] - Process-local, concurrency-safe stores for mappings and domain tallies
//!
//! Nothing here survives a restart: both stores start empty and are dropped
//! with the process.

pub mod memory;
