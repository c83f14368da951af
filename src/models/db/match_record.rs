use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A completed match exactly as stored
/// Maps to `matches` table in PostgreSQL
///
/// Rows are written once, when a match becomes terminal, and never
/// updated afterwards.
///
/// # Database Schema
/// - Primary key: `id` (monotonic, used for recency ordering)
/// - Unique constraint: `uuid`
/// - Foreign keys: `player1_id`, `player2_id`, `winner_id` (players)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: i32,
    pub uuid: Uuid,
    pub player1_id: i32,
    pub player2_id: i32,
    pub winner_id: Option<i32>,
    pub score_str: String,
    pub created_at: NaiveDateTime,
}

/// A completed match joined with its player names
///
/// Read-side projection used by the store and the view layer; the raw
/// foreign keys are resolved to names in the query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMatch {
    pub id: i32,
    pub uuid: Uuid,
    pub player_one_name: String,
    pub player_two_name: String,
    pub winner_name: Option<String>,
    pub score_str: String,
    pub created_at: NaiveDateTime,
}
