#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use serde::de::DeserializeOwned;
use vne_techwear_api::{
    db::create_schema, dto::products::CreateProductRequest, routes::create_router,
    state::AppState,
};

/// Fresh in-memory store with the products table in place.
///
/// A single pooled connection keeps every query on the same SQLite database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let orm = Database::connect(opt).await?;
    create_schema(&orm).await?;
    Ok(AppState { orm })
}

pub async fn setup_app() -> anyhow::Result<(AppState, Router)> {
    let state = setup_state().await?;
    let app = create_router().with_state(state.clone());
    Ok((state, app))
}

pub fn new_product(name: &str, category: &str, price: f64) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: None,
        price,
        category: category.to_string(),
        sizes: vec!["M".to_string(), "L".to_string()],
        in_stock: true,
        image_url: None,
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
