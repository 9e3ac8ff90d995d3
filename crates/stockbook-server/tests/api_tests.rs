// Integration tests for the HTTP API layer
// Drives the router directly with oneshot requests against a temp workbook

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use stockbook_server::app;
use stockbook_store::WorkbookStore;

fn test_app(dir: &TempDir) -> Router {
    let store = WorkbookStore::new(dir.path().join("inventory.xlsx"));
    store.ensure_initialized().unwrap();
    app(store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let dir = TempDir::new().unwrap();
    let response = test_app(&dir).oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_dashboard_over_seed_data() {
    let dir = TempDir::new().unwrap();
    let response = test_app(&dir).oneshot(get("/api/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_items"], 3);
    assert_eq!(body["total_quantity"], 75);
    assert_eq!(body["stock_value"], 14707.50);
    assert_eq!(body["low_stock_count"], 0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_inventory_returns_seed_records() {
    let dir = TempDir::new().unwrap();
    let response = test_app(&dir).oneshot(get("/api/inventory")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["code"], "PRD-001");
    assert_eq!(rows[0]["quantity"], 12);
    assert_eq!(rows[1]["unit_price"], 25.5);
    assert_eq!(rows[2]["location"], "C2");
}

#[tokio::test]
async fn test_add_item_then_list() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/inventory",
            json!({
                "code": "PRD-010",
                "name": "Desk Lamp",
                "quantity": 4,
                "unit_price": 19.9,
                "minimum": 1
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Item added");
    assert_eq!(body["item"]["code"], "PRD-010");
    // Omitted fields come back defaulted
    assert_eq!(body["item"]["category"], "");
    assert_eq!(body["item"]["location"], "");

    let response = app.oneshot(get("/api/inventory")).await.unwrap();
    let rows = body_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_add_duplicate_code_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(post_json("/api/inventory", json!({ "code": "PRD-001" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("PRD-001"));

    // And: the inventory is unchanged
    let response = app.oneshot(get("/api/inventory")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_add_item_missing_code_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let response = test_app(&dir)
        .oneshot(post_json("/api/inventory", json!({ "name": "No Code" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("code"));
}

#[tokio::test]
async fn test_add_item_negative_quantity_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let response = test_app(&dir)
        .oneshot(post_json(
            "/api/inventory",
            json!({ "code": "PRD-010", "quantity": -5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("quantity"));
}
