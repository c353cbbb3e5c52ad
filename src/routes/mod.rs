use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::json;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod params;
pub mod products;

// Build the application router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .merge(products::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = json!({ "message": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
