//! HTTP tests for the counter API, driven in-process against the router

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use redis_counter::{
    create_router, AppError, AppResult, AppState, CounterService, KvStore, MemoryStore,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Store that is never reachable
struct DownStore;

#[async_trait]
impl KvStore for DownStore {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::store_unavailable("connection refused"))
    }
    async fn set(&self, _key: &str, _value: i64) -> AppResult<()> {
        Err(AppError::store_unavailable("connection refused"))
    }
    async fn incr(&self, _key: &str) -> AppResult<i64> {
        Err(AppError::store_unavailable("connection refused"))
    }
    async fn decr(&self, _key: &str) -> AppResult<i64> {
        Err(AppError::store_unavailable("connection refused"))
    }
    async fn ping(&self) -> AppResult<()> {
        Err(AppError::store_unavailable("connection refused"))
    }
    fn backend(&self) -> &'static str {
        "down"
    }
}

fn app_with(store: Arc<dyn KvStore>) -> Router {
    let counter = CounterService::with_default_key(store);
    create_router(Arc::new(AppState::new(counter)))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_initial_counter_value() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = call(&app, Method::GET, "/api/counter").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "value": 0 }));
}

#[tokio::test]
async fn test_increment_counter() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let (status, body) = call(&app, Method::POST, "/api/counter/increment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 1);

    let (_, body) = call(&app, Method::POST, "/api/counter/increment").await;
    assert_eq!(body["value"], 2);
}

#[tokio::test]
async fn test_decrement_below_zero_is_not_clamped() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = call(&app, Method::POST, "/api/counter/decrement").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], -1);
}

#[tokio::test]
async fn test_reset_counter() {
    let store = MemoryStore::new();
    store.set("counter:value", 42).await.unwrap();
    let app = app_with(Arc::new(store));

    let (status, body) = call(&app, Method::POST, "/api/counter/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 0);

    let (_, body) = call(&app, Method::GET, "/api/counter").await;
    assert_eq!(body["value"], 0);
}

#[tokio::test]
async fn test_multiple_operations() {
    let app = app_with(Arc::new(MemoryStore::new()));

    for i in 1..=3 {
        call(&app, Method::POST, "/api/counter/increment").await;
        let (_, body) = call(&app, Method::GET, "/api/counter").await;
        assert_eq!(body["value"], i);
    }

    call(&app, Method::POST, "/api/counter/decrement").await;
    call(&app, Method::POST, "/api/counter/decrement").await;
    let (_, body) = call(&app, Method::GET, "/api/counter").await;
    assert_eq!(body["value"], 1);

    call(&app, Method::POST, "/api/counter/reset").await;
    let (_, body) = call(&app, Method::GET, "/api/counter").await;
    assert_eq!(body["value"], 0);
}

#[tokio::test]
async fn test_wrong_method_rejected() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, _) = call(&app, Method::GET, "/api/counter/increment").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_store_down_returns_503_envelope() {
    let app = app_with(Arc::new(DownStore));

    for (method, uri) in [
        (Method::GET, "/api/counter"),
        (Method::POST, "/api/counter/increment"),
        (Method::POST, "/api/counter/decrement"),
        (Method::POST, "/api/counter/reset"),
    ] {
        let (status, body) = call(&app, method, uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
        assert!(body["latency_ms"].is_number());
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_malformed_value_returns_500() {
    let store = MemoryStore::new();
    store.set_raw("counter:value", "twelve");
    let app = app_with(Arc::new(store));

    let (status, body) = call(&app, Method::GET, "/api/counter").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "STORE_INVALID_VALUE");

    let (status, body) = call(&app, Method::POST, "/api/counter/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 0);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["store"], "memory");

    let app = app_with(Arc::new(DownStore));
    let (status, body) = call(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["store_reachable"], false);
}

#[tokio::test]
async fn test_request_id_header() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .uri("/api/counter")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let request = Request::builder()
        .uri("/api/counter")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let minted = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(minted.len(), 36);
}
