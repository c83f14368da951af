//! # Match API Routes
//!
//! JSON endpoints binding the match service:
//!
//! - `POST /match` — create a match
//! - `GET  /match` — unified active + completed listing (paginated, filterable)
//! - `GET  /match/{match_uuid}` — live or final view of one match
//! - `POST /match/{match_uuid}/score` — award a point to one side
//! - `POST /match/{match_uuid}/reset` — clear an active match's score

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::matches::{award_point, create_match, get_match, list_matches, reset_match},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/match", post(create_match).get(list_matches))
        .route("/match/{match_uuid}", get(get_match))
        .route("/match/{match_uuid}/score", post(award_point))
        .route("/match/{match_uuid}/reset", post(reset_match))
}
