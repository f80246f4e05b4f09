//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, including expiry by
//! the background reaper.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pokecache::{api::create_router, AppState, ExpiringCache};
use serde_json::{json, Value};
use tokio::time::sleep;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_state(interval: Duration) -> AppState {
    AppState::new(ExpiringCache::new(interval).unwrap())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn add_request(key: &str, value: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/entries")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "key": key, "value": value }).to_string()))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    let query = serde_urlencoded::to_string([("key", key)]).unwrap();
    Request::builder()
        .uri(format!("/entries?{}", query))
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Add Endpoint Tests ==

#[tokio::test]
async fn test_add_endpoint_success() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    let (status, json) = send(&app, add_request("test_key", json!("test_value"))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("test_key"));
    assert_eq!(json["key"], "test_key");
}

#[tokio::test]
async fn test_add_empty_key_request() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    let (status, json) = send(&app, add_request("", json!(1))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/entries")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == Get Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_router(create_test_state(Duration::from_secs(300)));
    let url = "https://pokeapi.co/api/v2/location-area?offset=20&limit=20";
    let page = json!({
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area?offset=40&limit=20",
        "results": [{"name": "canalave-city-area"}]
    });

    let (status, _) = send(&app, add_request(url, page.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, get_request(url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], url);
    assert_eq!(json["value"], page);
}

#[tokio::test]
async fn test_get_key_with_reserved_characters() {
    let app = create_router(create_test_state(Duration::from_secs(300)));
    let url = "https://example.test/search?q=mr+mime&name=Flabébé #1";

    send(&app, add_request(url, json!({"found": true}))).await;

    let (status, json) = send(&app, get_request(url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], url);
    assert_eq!(json["value"]["found"], true);

    // A literal '+' must not be read back as a space
    let (status, _) = send(&app, get_request(&url.replace('+', " "))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    let (status, json) = send(&app, get_request("pokemon/missingno")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("pokemon/missingno"));
}

#[tokio::test]
async fn test_overwrite_via_api() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    send(&app, add_request("pokemon/ditto", json!({"v": 1}))).await;
    send(&app, add_request("pokemon/ditto", json!({"v": 2}))).await;

    let (_, json) = send(&app, get_request("pokemon/ditto")).await;
    assert_eq!(json["value"], json!({"v": 2}));
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_router(create_test_state(Duration::from_millis(1500)));

    send(&app, add_request("stats_key", json!("v"))).await;
    send(&app, get_request("stats_key")).await; // hit
    send(&app, get_request("nonexistent")).await; // miss

    let (status, json) = send(
        &app,
        Request::builder()
            .uri("/stats")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["hit_rate"], 0.5);
    assert_eq!(json["interval_ms"], 1500);
    assert_eq!(json["closed"], false);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_test_state(Duration::from_secs(300)));

    let (status, json) = send(
        &app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Expiry via API Tests ==

#[tokio::test]
async fn test_reaper_expiry_via_api() {
    let app = create_router(create_test_state(Duration::from_millis(100)));

    send(&app, add_request("pokemon/pikachu", json!({"id": 25}))).await;

    let (status, _) = send(&app, get_request("pokemon/pikachu")).await;
    assert_eq!(status, StatusCode::OK);

    sleep(Duration::from_millis(350)).await;

    let (status, _) = send(&app, get_request("pokemon/pikachu")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_entries_survive_after_close() {
    let state = create_test_state(Duration::from_millis(50));
    let cache = state.cache.clone();
    let app = create_router(state);

    send(&app, add_request("pokemon/eevee", json!({"id": 133}))).await;
    cache.close().await;

    sleep(Duration::from_millis(250)).await;

    let (status, json) = send(&app, get_request("pokemon/eevee")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"]["id"], 133);

    let (_, stats) = send(
        &app,
        Request::builder()
            .uri("/stats")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(stats["closed"], true);
}
