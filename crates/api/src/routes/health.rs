use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of books currently held in memory.
    pub books: usize,
}

/// GET /health -- returns service status and collection size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let books = state.books.read().await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}

/// Mount health check routes at the root, alongside `/books`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
