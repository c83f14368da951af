use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A player referenced by completed matches
/// Maps to `players` table in PostgreSQL
///
/// Players are created on demand when a finished match is persisted
/// (get-or-create by name); there is no standalone player registration.
///
/// # Database Schema
/// - Primary key: `id`
/// - Unique constraint: `name`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub name: String,
}
