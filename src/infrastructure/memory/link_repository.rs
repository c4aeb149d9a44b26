//! In-memory implementation of [`LinkRepository`].

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::{Link, ShortKey};
use crate::domain::repositories::LinkRepository;

/// Mapping store backed by a [`DashMap`].
///
/// DashMap shards its table behind independent locks, so lookups and inserts
/// on different keys rarely contend. The insert path goes through
/// [`DashMap::entry`], which holds the shard write lock across the
/// check-and-insert and makes `put_if_absent` atomic per key.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<ShortKey, Link>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn put_if_absent(&self, key: &ShortKey, long_url: &str) -> Link {
        match self.links.entry(key.clone()) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => {
                let link = Link::new(key.clone(), long_url.to_string(), Utc::now());
                debug!(key = %key, long_url, "New mapping stored");
                slot.insert(link).clone()
            }
        }
    }

    fn get(&self, key: &ShortKey) -> Option<Link> {
        self.links.get(key).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}
