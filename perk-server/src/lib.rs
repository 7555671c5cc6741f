//! Perk Server - REST backend for browsing merchant perks
//!
//! # Module structure
//!
//! ```text
//! perk-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer (connection, models, repositories)
//! └── utils/         # Error types, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, ConfigError, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
