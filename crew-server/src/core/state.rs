use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use shared::error::AppError;

/// Server state — shared by every request handler
///
/// Holds the immutable configuration and the SQLite connection pool.
/// Cloning is cheap (the pool is an `Arc` internally), which is how
/// axum distributes state across handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Create server state from existing parts
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state: open the database (running migrations)
    /// under the configured path
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;

        Ok(Self::new(config.clone(), db.pool))
    }
}
