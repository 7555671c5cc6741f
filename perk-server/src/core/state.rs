use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared handles for all request handlers
///
/// Holds the configuration and the long-lived database connection.
/// Cloning is cheap; the database handle is reference-counted internally
/// and is injected into repositories rather than read from a global.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Document database handle
    pub db: Surreal<Any>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// Connect to the database and build the state.
    ///
    /// A connection failure propagates to the caller; the decision to
    /// exit the process belongs to `main`, not to this module.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::connect(&config.database_url).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }
}
