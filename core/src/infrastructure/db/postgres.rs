use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

/// Shared connection pool handed to every repository.
#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies the embedded migrations.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.url());
        options.sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database {}:{}: {}", config.host, config.port, e);
            CoreError::InternalServerError
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                error!("Failed to run database migrations: {}", e);
                CoreError::InternalServerError
            })?;

        info!("Connected to database {} on {}", config.name, config.host);

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
