//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use serde_json::json;
use storefront::commands;

use crate::support::{service, TestService};

/// Bind to port 0 and return the actual address.
async fn start_server(service: Arc<TestService>) -> String {
    let app = commands::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_server(Arc::new(service())).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["commands"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn session_key_is_issued_and_reused() {
    let base = start_server(Arc::new(service())).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/basket.add"))
        .json(&json!({ "product_id": 2, "qty": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let key = resp
        .headers()
        .get("x-session-key")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "qty": 3 }));

    let resp = client
        .post(format!("{base}/basket.summary"))
        .header("x-session-key", &key)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get("x-session-key").unwrap(), key.as_str());
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["qty"], 3);
    assert_eq!(body["subtotal"], "10.50");
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let base = start_server(Arc::new(service())).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/basket.checkout"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!("{base}/basket.add"))
        .json(&json!({ "product_id": 1, "qty": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("guard rejected"));
}
