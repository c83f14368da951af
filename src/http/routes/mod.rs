//! # HTTP Routes Module
//!
//! Route groups for the match tracking API.
//!
//! - `api.rs` — match lifecycle and scoring endpoints under `/api`
//! - a bare `/health` probe for deployment checks

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod api;

/// Create the main HTTP router with all routes
///
/// Combines all route groups into a single router with shared state.
pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api::routes())
        .with_state(state)
}
