//! Stockbook Server - HTTP API layer
//!
//! Thin axum router over [`WorkbookStore`]: four endpoints, JSON in and
//! out, validation errors mapped to 400 with the store's message. The store
//! is injected at construction; handlers hold no other state.

pub mod config;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};

use stockbook_core::dashboard::DashboardSummary;
use stockbook_core::errors::StockbookError;
use stockbook_core::model::{InventoryItem, NewItem};
use stockbook_store::WorkbookStore;

pub use config::Config;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: WorkbookStore,
}

/// Build the API router around the given store
///
/// CORS is permissive: the reference client is a separate browser app.
pub fn app(store: WorkbookStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .route("/api/inventory", get(list_inventory).post(add_inventory_item))
        .with_state(AppState { store })
        .layer(cors)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(state.store.dashboard()?))
}

async fn list_inventory(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    Ok(Json(state.store.load_inventory()?))
}

async fn add_inventory_item(
    State(state): State<AppState>,
    Json(payload): Json<NewItem>,
) -> Result<Json<Value>, ApiError> {
    let item = state.store.add_item(payload)?;
    Ok(Json(json!({ "message": "Item added", "item": item })))
}

/// Response mapping for store errors
///
/// Validation failures become 400 with the human-readable message in a
/// `detail` field; anything else is a 500 for the current request.
pub struct ApiError(StockbookError);

impl From<StockbookError> for ApiError {
    fn from(err: StockbookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            warn!(error = %self.0, "rejected request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
