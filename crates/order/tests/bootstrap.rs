mod common;

use axum::http::StatusCode;
use common::{InMemoryOrders, app_with, get_json, in_memory_deps, post_json, unreachable_deps};
use meal_order::{config::ValidationMode, state::AppState};
use serde_json::json;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn bootstrap_is_idempotent_and_keeps_rows() {
    let store = InMemoryOrders::ready();
    let app = app_with(in_memory_deps(store.clone(), ValidationMode::Passthrough));
    post_json(&app, "/submit", &json!({ "user": "Alice", "total": 150 })).await;

    let state = AppState::from_deps(in_memory_deps(store.clone(), ValidationMode::Passthrough));
    let bootstrapper = state.di_container.bootstrapper.clone();

    assert!(bootstrapper.run().await);
    assert!(bootstrapper.run().await);

    assert_eq!(store.schema_calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.rows().len(), 1);
    assert_eq!(bootstrapper.metrics().status.get(), 1);
    assert_eq!(bootstrapper.metrics().failures.get(), 0);
}

#[tokio::test]
async fn bootstrap_creates_missing_table() {
    let store = InMemoryOrders::without_table();
    let deps = in_memory_deps(store.clone(), ValidationMode::Passthrough);
    let state = AppState::from_deps(deps.clone());

    let handle = state.di_container.bootstrapper.clone().spawn();
    assert!(handle.await.unwrap());

    let app = app_with(deps);
    let (status, body) = get_json(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn bootstrap_failure_is_reported_not_fatal() {
    let deps = unreachable_deps();
    let state = AppState::from_deps(deps.clone());
    let bootstrapper = state.di_container.bootstrapper.clone();

    let handle = bootstrapper.clone().spawn();
    assert!(!handle.await.unwrap());

    assert_eq!(bootstrapper.metrics().status.get(), 0);
    assert_eq!(bootstrapper.metrics().failures.get(), 1);

    // The server still answers; each storage-backed request fails on its own.
    let app = app_with(deps);
    let (status, body) = get_json(&app, "/orders").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["result"], "error");
}
