use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::service::MatchService;
use crate::store::MatchStore;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub postgres: PgPool,
    pub service: MatchService,
}

impl AppState {
    /// Create a new AppState by connecting to PostgreSQL
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let database_url = std::env::var("DATABASE_URL")?;
        let config = AppConfig {
            database_url: database_url.clone(),
        };

        // PostgreSQL connection pool built from config.database_url
        let postgres_pool = PgPoolOptions::new()
            .max_connections(50)
            .min_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&config.database_url)
            .await?;

        Ok(Self::with_pool(config, postgres_pool))
    }

    /// Assemble the state around an existing pool (used by the test
    /// harness, which manages its own database container).
    pub fn with_pool(config: AppConfig, postgres: PgPool) -> Self {
        let store = MatchStore::new(postgres.clone());
        let service = MatchService::new(store);
        Self {
            config,
            postgres,
            service,
        }
    }
}
