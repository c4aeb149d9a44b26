mod common;

use std::sync::Arc;

use blurb::application::services::ShortenService;
use blurb::domain::tally_worker::run_tally_worker;
use blurb::infrastructure::memory::{DomainCounter, InMemoryLinkRepository};
use tokio::sync::mpsc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortens_of_same_url_store_one_mapping() {
    let (state, mut rx, counter) = common::create_test_state();
    let service = state.shorten_service.clone();

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten("https://github.com/cheerioskun/constellation")
                    .unwrap()
                    .short_url
            })
        })
        .collect();

    let mut short_urls = Vec::new();
    for task in tasks {
        short_urls.push(task.await.unwrap());
    }

    assert!(short_urls.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(service.mapping_count(), 1);

    common::apply_pending_tallies(&mut rx, &counter);
    assert_eq!(counter.count("github.com"), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shortens_are_all_counted_by_worker() {
    let counter = Arc::new(DomainCounter::new());
    let (tx, rx) = mpsc::channel(1_000);
    let worker = tokio::spawn(run_tally_worker(rx, counter.clone()));

    let service = Arc::new(ShortenService::new(
        Arc::new(InMemoryLinkRepository::new()),
        counter.clone(),
        tx,
        common::BASE_URL,
    ));

    let tasks: Vec<_> = (0..200)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let host = if i % 2 == 0 { "github.com" } else { "docs.rs" };
                service.shorten(&format!("https://{host}/{i}")).unwrap();
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    drop(service);
    worker.await.unwrap();

    assert_eq!(counter.count("github.com"), 100);
    assert_eq!(counter.count("docs.rs"), 100);
    assert_eq!(counter.total(), 200);
}
