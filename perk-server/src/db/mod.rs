//! Database Module
//!
//! Connection handling for the embedded/remote document store.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

const NAMESPACE: &str = "perks";
const DATABASE: &str = "perks";

/// Database service — owns the long-lived connection handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the store named by `uri`.
    ///
    /// The engine is selected from the connection string scheme
    /// (`memory`, `rocksdb://path`, `ws://host:port`). On failure the
    /// error is logged and returned to the caller; exiting the process
    /// is the entry point's decision.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let db = match any::connect(uri).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Database connection error: {}", e);
                return Err(AppError::database(format!("Failed to connect to {uri}: {e}")));
            }
        };

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established ({})", uri);

        Ok(Self { db })
    }
}
