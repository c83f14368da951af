use crate::errors::AppError;
use crate::models::db::Player;

use super::PlayerRepository;

impl PlayerRepository {
    /// Find a player by exact name
    ///
    /// # Returns
    /// - `Ok(Some(Player))` if found
    /// - `Ok(None)` if not found
    /// - `Err` on database error
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Player>, AppError> {
        let player = sqlx::query_as::<_, Player>("SELECT id, name FROM players WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::StorageFailure(format!("Failed to fetch player: {}", e)))?;

        Ok(player)
    }
}
