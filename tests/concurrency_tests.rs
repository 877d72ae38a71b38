use axum::{body::Body, http::StatusCode};
use serde_json::json;
use std::time::Instant;

mod common;
use common::*;

/// Parallel creates of distinct names must all land in the store
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let app = setup_test_app(&[]);
    let start = Instant::now();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let payload = json!({ "name": format!("room-{}", i), "on": false }).to_string();
                send(&app, "POST", "/lightbulbs/create", Body::from(payload)).await.0
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (_, body) = send_empty(&app, "GET", "/lightbulbs").await;
    assert_eq!(body.as_object().unwrap().len(), 50);

    println!("50 concurrent creates took: {:?}", start.elapsed());
}

/// An even number of switches on the standalone registry leaves the state unchanged
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_switches_on_registry() {
    let app = setup_standalone_app();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send_empty(&app, "PUT", "/lightbulbs/switch?name=kitchen").await.0
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (_, body) = send_empty(&app, "GET", "/lightbulbs").await;
    assert_eq!(body["kitchen"], false);
}
