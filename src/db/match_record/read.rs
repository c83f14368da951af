use sqlx::query_as;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::db::CompletedMatch;

use super::MatchRecordRepository;

const SELECT_COMPLETED: &str = "SELECT m.id, m.uuid,
        p1.name AS player_one_name,
        p2.name AS player_two_name,
        w.name AS winner_name,
        m.score_str, m.created_at
    FROM matches m
    JOIN players p1 ON p1.id = m.player1_id
    JOIN players p2 ON p2.id = m.player2_id
    LEFT JOIN players w ON w.id = m.winner_id";

impl MatchRecordRepository {
    /// Find a completed match by its uuid, with player names resolved
    ///
    /// # Returns
    /// - `Ok(Some(CompletedMatch))` if found
    /// - `Ok(None)` if not found
    /// - `Err` on database error
    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<CompletedMatch>, AppError> {
        let record = query_as::<_, CompletedMatch>(&format!("{SELECT_COMPLETED} WHERE m.uuid = $1"))
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::StorageFailure(format!("Failed to fetch match: {}", e)))?;

        Ok(record)
    }

    /// List completed matches, newest first (descending id).
    ///
    /// `filter` narrows to matches where either player name contains the
    /// given substring, case-insensitively.
    pub async fn list_filtered(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<CompletedMatch>, AppError> {
        let records = match filter {
            Some(needle) if !needle.is_empty() => {
                let escaped = needle
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                let pattern = format!("%{}%", escaped);
                query_as::<_, CompletedMatch>(&format!(
                    "{SELECT_COMPLETED} WHERE p1.name ILIKE $1 OR p2.name ILIKE $1 ORDER BY m.id DESC"
                ))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                query_as::<_, CompletedMatch>(&format!("{SELECT_COMPLETED} ORDER BY m.id DESC"))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::StorageFailure(format!("Failed to list matches: {}", e)))?;

        Ok(records)
    }

    /// Count all completed matches
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::StorageFailure(format!("Failed to count matches: {}", e)))?;

        Ok(count.0)
    }
}
