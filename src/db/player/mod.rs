use sqlx::PgPool;

mod create;
mod read;

/// Repository for players referenced by completed matches
///
/// Players have no registration flow; rows appear the first time a name
/// shows up in a persisted match.
#[derive(Clone)]
pub struct PlayerRepository {
    pub(crate) pool: PgPool,
}

impl PlayerRepository {
    /// Create a new PlayerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
