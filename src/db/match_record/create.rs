use sqlx::PgConnection;
use uuid::Uuid;

use crate::errors::AppError;

use super::MatchRecordRepository;

impl MatchRecordRepository {
    /// Insert a completed match, keyed by its uuid.
    ///
    /// Idempotent: a uuid that is already persisted is left untouched and
    /// reported as `Ok(None)`.
    ///
    /// Runs on an explicit connection so the caller can wrap it in one
    /// transaction with the player resolution.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        uuid: Uuid,
        player1_id: i32,
        player2_id: i32,
        winner_id: Option<i32>,
        score_str: &str,
    ) -> Result<Option<i32>, AppError> {
        if player1_id == player2_id {
            return Err(AppError::InvalidPlayers("Players must be distinct".into()));
        }

        let inserted: Option<(i32,)> = sqlx::query_as(
            "INSERT INTO matches (uuid, player1_id, player2_id, winner_id, score_str)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (uuid) DO NOTHING
            RETURNING id",
        )
        .bind(uuid)
        .bind(player1_id)
        .bind(player2_id)
        .bind(winner_id)
        .bind(score_str)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::StorageFailure(format!("Failed to insert match: {}", e)))?;

        match inserted {
            Some((id,)) => {
                tracing::info!("Persisted completed match {} (ID: {})", uuid, id);
                Ok(Some(id))
            }
            None => {
                tracing::info!("Match {} already persisted, skipping insert", uuid);
                Ok(None)
            }
        }
    }
}
