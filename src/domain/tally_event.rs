//! Tally event model for asynchronous domain counting.

/// A pending increment of a domain's shorten count.
///
/// Sent from the shorten path to the background worker via a bounded channel
/// so that counting never delays or fails the client-visible response.
///
/// # Usage Flow
///
/// 1. Created by the shorten service with the long URL's host
/// 2. Sent to the channel with `try_send` (non-blocking)
/// 3. Processed by [`crate::domain::tally_worker::run_tally_worker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEvent {
    pub domain: String,
}

impl TallyEvent {
    /// Creates a new tally event for `domain` (e.g., "github.com").
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}
