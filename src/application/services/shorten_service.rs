//! Shortening, resolution and domain ranking service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

use crate::domain::entities::{DomainTally, Link, ShortKey, ShortenedLink};
use crate::domain::repositories::LinkRepository;
use crate::domain::tally_event::TallyEvent;
use crate::error::ServiceError;
use crate::infrastructure::memory::DomainCounter;
use crate::utils::extract_domain::extract_domain;
use crate::utils::key_deriver::{derive_key, short_url};

/// Number of domains reported by [`ShortenService::metrics_report`].
pub const METRICS_TOP_N: usize = 3;

/// Service orchestrating short key derivation, mapping storage and domain
/// tallies.
///
/// Holds no state of its own: mappings live in the injected repository and
/// counts in the shared [`DomainCounter`], which is fed by the tally worker
/// through `tally_sender`.
pub struct ShortenService<R: LinkRepository> {
    repository: Arc<R>,
    counter: Arc<DomainCounter>,
    tally_sender: mpsc::Sender<TallyEvent>,
    base_url: String,
}

impl<R: LinkRepository> ShortenService<R> {
    /// Creates a new shorten service.
    ///
    /// # Arguments
    ///
    /// - `repository` - mapping store
    /// - `counter` - domain counter read by [`Self::metrics_report`]
    /// - `tally_sender` - queue drained by
    ///   [`crate::domain::tally_worker::run_tally_worker`] into `counter`
    /// - `base_url` - externally visible address used to build short URLs
    pub fn new(
        repository: Arc<R>,
        counter: Arc<DomainCounter>,
        tally_sender: mpsc::Sender<TallyEvent>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            counter,
            tally_sender,
            base_url: base_url.into(),
        }
    }

    /// Shortens `long_url`, storing the mapping on first use.
    ///
    /// # Flow
    ///
    /// 1. Validate that the URL parses and has a host
    /// 2. Derive the short key
    /// 3. Store the mapping unless the key is already present
    /// 4. Queue a tally for the host without waiting for it
    /// 5. Return the fully qualified short URL
    ///
    /// Shortening the same URL again returns the same short URL and leaves the
    /// stored mapping untouched, but is still counted in the domain tally.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidInput`] if the URL contains control
    /// characters or surrounding whitespace, cannot be parsed, or has no host.
    pub fn shorten(&self, long_url: &str) -> Result<ShortenedLink, ServiceError> {
        let domain = extract_domain(long_url).inspect_err(|e| {
            warn!(url = long_url, error = %e, "Could not parse URL");
        })?;

        let key = derive_key(long_url);
        let link = self.repository.put_if_absent(&key, long_url);
        let short_url = short_url(&self.base_url, &link.key);

        info!(url = long_url, domain = %domain, short_url = %short_url, "URL shortened");

        self.dispatch_tally(domain);

        Ok(ShortenedLink { link, short_url })
    }

    /// Resolves a short key to its stored mapping.
    ///
    /// Keys that are not well-formed are reported as unknown without touching
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UnknownKey`] if no mapping exists for `key`.
    pub fn resolve(&self, key: &str) -> Result<Link, ServiceError> {
        let found = ShortKey::parse(key).and_then(|parsed| self.repository.get(&parsed));

        match found {
            Some(link) => {
                info!(key, long_url = %link.long_url, "Found short to long mapping");
                Ok(link)
            }
            None => {
                info!(key, "No mapping for short key");
                Err(ServiceError::UnknownKey(key.to_string()))
            }
        }
    }

    /// Returns the [`METRICS_TOP_N`] most shortened domains, highest first.
    pub fn metrics_report(&self) -> Vec<DomainTally> {
        self.top_domains(METRICS_TOP_N)
    }

    /// Returns up to `n` domains ranked by shorten count.
    ///
    /// Equal counts keep the order in which domains were first counted.
    pub fn top_domains(&self, n: usize) -> Vec<DomainTally> {
        self.counter.top(n)
    }

    /// Builds the short URL for `key` under this service's base address.
    pub fn short_url(&self, key: &ShortKey) -> String {
        short_url(&self.base_url, key)
    }

    /// Number of stored mappings.
    pub fn mapping_count(&self) -> usize {
        self.repository.len()
    }

    /// Number of distinct domains counted so far.
    pub fn domain_count(&self) -> usize {
        self.counter.len()
    }

    /// Returns `true` once the tally worker has gone away.
    pub fn is_tally_queue_closed(&self) -> bool {
        self.tally_sender.is_closed()
    }

    /// Free slots in the tally queue.
    pub fn tally_queue_capacity(&self) -> usize {
        self.tally_sender.capacity()
    }

    /// Queues a tally for `domain` without waiting.
    ///
    /// When the queue is full or the worker has gone away, the count is
    /// applied here instead. Every successful shorten is counted exactly once
    /// and the response never waits on the queue.
    fn dispatch_tally(&self, domain: String) {
        match self.tally_sender.try_send(TallyEvent::new(domain)) {
            Ok(()) => debug!("Tally queued"),
            Err(TrySendError::Full(event)) => {
                debug!(domain = %event.domain, "Tally queue full, counting inline");
                self.counter.increment(&event.domain);
            }
            Err(TrySendError::Closed(event)) => {
                warn!(domain = %event.domain, "Tally queue closed, counting inline");
                self.counter.increment(&event.domain);
            }
        }
    }
}
