//! Background worker applying domain tallies.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::tally_event::TallyEvent;
use crate::infrastructure::memory::DomainCounter;

/// Drains tally events and applies them to `counter`.
///
/// Events are applied one at a time in arrival order, so domains that end up
/// with equal counts keep the order in which they were first shortened.
///
/// The worker runs until every sender has been dropped and the queue is
/// empty. Each increment is a single atomic add, so the loop cannot block on
/// anything but the channel itself; awaiting the returned future after the
/// server stops is enough to guarantee no tally is lost or left running.
pub async fn run_tally_worker(mut rx: mpsc::Receiver<TallyEvent>, counter: Arc<DomainCounter>) {
    while let Some(event) = rx.recv().await {
        counter.increment(&event.domain);
        debug!(domain = %event.domain, "Domain tally applied");
    }

    info!(
        domains = counter.len(),
        total = counter.total(),
        "Tally queue closed, worker exiting"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_worker_applies_all_events_before_exiting() {
        let counter = Arc::new(DomainCounter::new());
        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_tally_worker(rx, counter.clone()));

        for domain in ["github.com", "youtube.com", "github.com"] {
            tx.send(TallyEvent::new(domain)).await.unwrap();
        }
        drop(tx);

        worker.await.unwrap();

        assert_eq!(counter.count("github.com"), 2);
        assert_eq!(counter.count("youtube.com"), 1);
        assert_eq!(counter.total(), 3);
    }

    #[tokio::test]
    async fn test_worker_preserves_arrival_order_for_ties() {
        let counter = Arc::new(DomainCounter::new());
        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_tally_worker(rx, counter.clone()));

        for domain in ["b.com", "a.com", "c.com"] {
            tx.send(TallyEvent::new(domain)).await.unwrap();
        }
        drop(tx);
        worker.await.unwrap();

        let ranked: Vec<_> = counter.top(3).into_iter().map(|t| t.domain).collect();
        assert_eq!(ranked, vec!["b.com", "a.com", "c.com"]);
    }

    #[tokio::test]
    async fn test_worker_exits_on_closed_empty_queue() {
        let counter = Arc::new(DomainCounter::new());
        let (tx, rx) = mpsc::channel::<TallyEvent>(1);
        drop(tx);

        run_tally_worker(rx, counter.clone()).await;

        assert!(counter.is_empty());
    }
}
