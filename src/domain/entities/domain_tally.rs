//! Per-domain shorten counts.

use serde::Serialize;
use std::fmt;

/// Number of shorten requests served for a single domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainTally {
    pub domain: String,
    pub count: u64,
}

impl DomainTally {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

/// Renders as `<domain>: <count>`, the line format of the metrics report.
impl fmt::Display for DomainTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.domain, self.count)
    }
}
