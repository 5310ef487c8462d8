//! Application state for front-desk

use sqlx::PgPool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
}

impl AppState {
    /// Create a new AppState: connect, run migrations, seed base inventory
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        db::seed::seed_inventory(&pool).await?;

        Ok(Self { pool })
    }
}
