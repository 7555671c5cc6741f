//! Shared types for the Perks service
//!
//! Wire-level types used by both the server and the client:
//! the perk entity, its category set, and the response envelopes.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Perk, PerkCategory, PerkCreate};
pub use response::{ErrorResponse, PerkListResponse, PerkResponse};
