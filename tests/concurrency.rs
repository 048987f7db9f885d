//! Concurrency properties: no lost counter updates, and a slow request must
//! not stall unrelated connections.

use std::time::{Duration, Instant};

use serde_json::Value;

mod common;

#[tokio::test]
async fn concurrent_requests_lose_no_counts() {
    let addr = common::start_fixture("backend-conc").await;

    let concurrency = 32u64;
    let mut handles = Vec::new();
    for _ in 0..concurrency {
        let client = common::client();
        handles.push(tokio::spawn(async move {
            let res = client
                .get(format!("http://{}/api/echo", addr))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // One more request observes the final count: all concurrent increments
    // plus its own.
    let body: Value = common::client()
        .get(format!("http://{}/api/echo", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["request_count"], concurrency + 1);
}

#[tokio::test]
async fn slow_request_does_not_block_health() {
    let addr = common::start_fixture("backend-slow").await;

    // Kick off a 5s slow request on its own connection. Do not await it.
    let slow_client = common::client();
    let slow = tokio::spawn(async move {
        let _ = slow_client
            .get(format!("http://{}/api/slow?delay=5", addr))
            .send()
            .await;
    });

    // Give the slow request time to reach the server.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let start = Instant::now();
    let res = common::client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(res.status(), 200);
    assert!(
        elapsed < Duration::from_secs(1),
        "health took {:?} while a slow request was in flight",
        elapsed
    );

    slow.abort();
}
