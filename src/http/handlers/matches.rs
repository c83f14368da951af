// Match tracking handlers: create matches, award points, query scores

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::dto::{MatchView, Pagination},
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub player_one_name: String,
    pub player_two_name: String,
}

/// Body of a point award: which side scored.
#[derive(Debug, Deserialize)]
pub struct AwardPointRequest {
    pub player: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListResponse {
    pub matches: Vec<MatchView>,
    pub total_pages: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a new match between two named players. Returns the initial view.
pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), (StatusCode, String)> {
    let view = state
        .service
        .create_match(&payload.player_one_name, &payload.player_two_name)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create match: {}", e);
            e.to_response()
        })?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// Get one match by uuid: live scoreboard while active, final score once
/// completed. Returns `404` for unknown uuids.
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_uuid): Path<Uuid>,
) -> Result<Json<MatchView>, (StatusCode, String)> {
    let view = state.service.get_match(match_uuid).await.map_err(|e| {
        tracing::error!("Failed to get match {}: {}", match_uuid, e);
        e.to_response()
    })?;

    match view {
        Some(view) => Ok(Json(view)),
        None => Err(AppError::UnknownMatch(match_uuid).to_response()),
    }
}

/// Award a point to one side of a match.
pub async fn award_point(
    State(state): State<AppState>,
    Path(match_uuid): Path<Uuid>,
    Json(payload): Json<AwardPointRequest>,
) -> Result<Json<MatchView>, (StatusCode, String)> {
    let view = state
        .service
        .update_score(match_uuid, &payload.player)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update score for {}: {}", match_uuid, e);
            e.to_response()
        })?;

    Ok(Json(view))
}

/// Reset the score of an active match. Completed matches come back with
/// an error field and are left untouched.
pub async fn reset_match(
    State(state): State<AppState>,
    Path(match_uuid): Path<Uuid>,
) -> Result<Json<MatchView>, (StatusCode, String)> {
    let view = state.service.reset(match_uuid).await.map_err(|e| {
        tracing::error!("Failed to reset match {}: {}", match_uuid, e);
        e.to_response()
    })?;

    Ok(Json(view))
}

/// Paginated unified listing of active and completed matches, with an
/// optional name filter.
pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchListQuery>,
) -> Result<Json<MatchListResponse>, (StatusCode, String)> {
    let defaults = Pagination::default();
    let pagination = Pagination {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let (matches, total_pages) = state
        .service
        .list_matches(pagination, query.filter.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list matches: {}", e);
            e.to_response()
        })?;

    Ok(Json(MatchListResponse {
        matches,
        total_pages,
    }))
}
