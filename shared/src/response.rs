//! API Response types
//!
//! Envelopes shared between the server handlers and the fetch client.

use crate::models::Perk;
use serde::{Deserialize, Serialize};

/// Envelope for `GET /perks/{id}` and `POST /perks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkResponse {
    pub perk: Perk,
}

/// Envelope for `GET /perks/all`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkListResponse {
    pub perks: Vec<Perk>,
}

/// Error envelope emitted by the server on any non-2xx response
///
/// ```json
/// { "code": "E0003", "message": "Perk abc not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
