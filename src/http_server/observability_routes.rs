//! Health route
//!
//! `GET /health` reports liveness and how many books the store holds.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::books::BookStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub books: usize,
}

/// Health route over the given store, mounted at the root
pub fn health_routes(store: BookStore) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<BookStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books: store.len().await,
    })
}
