use sqlx::PgPool;

mod create;
mod read;

/// Repository for completed (terminal) matches
///
/// Rows are written once when a match ends and are immutable afterwards.
/// In-progress matches never reach this table.
#[derive(Clone)]
pub struct MatchRecordRepository {
    pub(crate) pool: PgPool,
}

impl MatchRecordRepository {
    /// Create a new MatchRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
