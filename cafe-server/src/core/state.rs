use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::QrService;

/// Server state - shared references to every service
///
/// Cheap to clone: the pool and HTTP client are internally reference
/// counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// QR payload/image service
    pub qr: QrService,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, qr: QrService) -> Self {
        Self { config, pool, qr }
    }

    /// Initialize state: open the database (applying migrations) and build
    /// the QR collaborator client
    pub async fn initialize(config: &Config) -> Result<Self, crate::utils::AppError> {
        let db = DbService::new(&config.database_path).await?;
        let qr = QrService::new(config);
        Ok(Self::new(config.clone(), db.pool().clone(), qr))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
