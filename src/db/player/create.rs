use sqlx::PgConnection;

use crate::errors::AppError;
use crate::models::db::Player;

use super::PlayerRepository;

impl PlayerRepository {
    /// Resolve a player id by name, creating the row if it does not exist.
    ///
    /// Runs on an explicit connection so it can participate in the
    /// save-completed transaction alongside the match insert.
    pub async fn get_or_create_by_name(
        &self,
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<i32, AppError> {
        if name.is_empty() {
            return Err(AppError::InvalidPlayers(
                "Player name cannot be empty".into(),
            ));
        }

        let existing = sqlx::query_as::<_, Player>("SELECT id, name FROM players WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| AppError::StorageFailure(format!("Failed to query player: {}", e)))?;

        if let Some(player) = existing {
            return Ok(player.id);
        }

        let player = sqlx::query_as::<_, Player>(
            "INSERT INTO players (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::StorageFailure(format!("Failed to create player: {}", e)))?;

        tracing::info!("Created new player: {} (ID: {})", player.name, player.id);

        Ok(player.id)
    }
}
