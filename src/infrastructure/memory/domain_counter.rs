//! Concurrent per-domain counter with a ranked snapshot.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::DomainTally;

/// Count slot for a single domain.
#[derive(Debug)]
struct Slot {
    /// Position in first-seen order; smaller means seen earlier.
    first_seen: u64,
    count: AtomicU64,
}

/// Counts shorten requests per domain.
///
/// Counts are plain atomics inside a [`DashMap`]: incrementing a known domain
/// only takes a shard read lock plus a `fetch_add`, so concurrent increments
/// never lose updates and never wait on each other for long. A domain's slot
/// is created under the shard write lock the first time it is seen and is
/// stamped with a sequence number at that moment.
///
/// # Ranking
///
/// [`top`](Self::top) orders by count descending. Equal counts are ordered by
/// first-seen sequence, earliest first, so the ranking is deterministic for a
/// given sequence of increments.
#[derive(Debug, Default)]
pub struct DomainCounter {
    slots: DashMap<String, Slot>,
    next_seq: AtomicU64,
}

impl DomainCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to `domain`'s count, starting it at 1 if unseen.
    pub fn increment(&self, domain: &str) {
        if let Some(slot) = self.slots.get(domain) {
            slot.count.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.slots
            .entry(domain.to_string())
            .or_insert_with(|| Slot {
                first_seen: self.next_seq.fetch_add(1, Ordering::Relaxed),
                count: AtomicU64::new(0),
            })
            .count
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Returns up to `n` domains ranked by count, highest first.
    ///
    /// This is a point-in-time snapshot taken shard by shard; increments
    /// racing with it may or may not be reflected.
    pub fn top(&self, n: usize) -> Vec<DomainTally> {
        let mut snapshot: Vec<(u64, DomainTally)> = self
            .slots
            .iter()
            .map(|entry| {
                let slot = entry.value();
                (
                    slot.first_seen,
                    DomainTally::new(entry.key().clone(), slot.count.load(Ordering::Relaxed)),
                )
            })
            .collect();

        snapshot.sort_unstable_by(|(seq_a, a), (seq_b, b)| {
            b.count.cmp(&a.count).then(seq_a.cmp(seq_b))
        });

        snapshot
            .into_iter()
            .take(n)
            .map(|(_, tally)| tally)
            .collect()
    }

    /// Current count for `domain`, zero if unseen.
    pub fn count(&self, domain: &str) -> u64 {
        self.slots
            .get(domain)
            .map_or(0, |slot| slot.count.load(Ordering::Relaxed))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.slots
            .iter()
            .map(|entry| entry.value().count.load(Ordering::Relaxed))
            .sum()
    }

    /// Number of distinct domains seen.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every tally. Administrative use only; the shorten path never
    /// decrements or resets.
    pub fn reset(&self) {
        self.slots.clear();
        self.next_seq.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ranked(counter: &DomainCounter, n: usize) -> Vec<(String, u64)> {
        counter
            .top(n)
            .into_iter()
            .map(|t| (t.domain, t.count))
            .collect()
    }

    #[test]
    fn test_increment_initializes_to_one() {
        let counter = DomainCounter::new();
        assert_eq!(counter.count("github.com"), 0);

        counter.increment("github.com");
        assert_eq!(counter.count("github.com"), 1);

        counter.increment("github.com");
        assert_eq!(counter.count("github.com"), 2);
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_top_orders_by_count_descending() {
        let counter = DomainCounter::new();
        for _ in 0..2 {
            counter.increment("github.com");
        }
        for _ in 0..4 {
            counter.increment("youtube.com");
        }
        for _ in 0..3 {
            counter.increment("linkedin.com");
        }
        counter.increment("gobyexample.com");

        assert_eq!(
            ranked(&counter, 3),
            vec![
                ("youtube.com".to_string(), 4),
                ("linkedin.com".to_string(), 3),
                ("github.com".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let counter = DomainCounter::new();
        counter.increment("zeta.com");
        counter.increment("alpha.com");
        counter.increment("mid.com");
        counter.increment("alpha.com");
        counter.increment("zeta.com");
        counter.increment("mid.com");

        assert_eq!(
            ranked(&counter, 3),
            vec![
                ("zeta.com".to_string(), 2),
                ("alpha.com".to_string(), 2),
                ("mid.com".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_higher_count_beats_earlier_first_seen() {
        let counter = DomainCounter::new();
        counter.increment("early.com");
        counter.increment("late.com");
        counter.increment("late.com");

        assert_eq!(ranked(&counter, 1), vec![("late.com".to_string(), 2)]);
    }

    #[test]
    fn test_top_with_fewer_domains_than_requested() {
        let counter = DomainCounter::new();
        counter.increment("only.com");

        assert_eq!(counter.top(3).len(), 1);
        assert!(DomainCounter::new().top(3).is_empty());
        assert!(counter.top(0).is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let counter = DomainCounter::new();
        counter.increment("a.com");
        counter.increment("b.com");

        counter.reset();

        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);

        counter.increment("b.com");
        counter.increment("a.com");
        assert_eq!(ranked(&counter, 2)[0].0, "b.com");
    }

    #[test]
    fn test_concurrent_increments_same_domain_lose_nothing() {
        let counter = Arc::new(DomainCounter::new());
        let threads = 8;
        let per_thread = 1_000;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    for _ in 0..per_thread {
                        counter.increment("hot.com");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.count("hot.com"), threads * per_thread);
        assert_eq!(counter.len(), 1);
    }

    #[test]
    fn test_concurrent_increments_many_domains() {
        let counter = Arc::new(DomainCounter::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        counter.increment(&format!("d{}.com", (i + t) % 10));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.total(), 8 * 500);
        assert_eq!(counter.len(), 10);
    }

    #[test]
    fn test_top_while_increments_in_flight() {
        let counter = Arc::new(DomainCounter::new());

        let writer = {
            let counter = Arc::clone(&counter);
            std::thread::spawn(move || {
                for i in 0..5_000 {
                    counter.increment(&format!("d{}.com", i % 50));
                }
            })
        };

        for _ in 0..100 {
            let snapshot = counter.top(3);
            assert!(snapshot.len() <= 3);
            assert!(snapshot.windows(2).all(|w| w[0].count >= w[1].count));
        }

        writer.join().unwrap();
        assert_eq!(counter.total(), 5_000);
    }
}
