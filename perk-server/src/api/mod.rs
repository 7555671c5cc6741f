//! API route modules
//!
//! - [`health`] - health check
//! - [`perks`] - perk listing, detail and create endpoints

pub mod health;
pub mod perks;

use axum::Router;

use crate::core::ServerState;

/// Assemble all API routes
pub fn router() -> Router<ServerState> {
    Router::new().merge(health::router()).merge(perks::router())
}

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
