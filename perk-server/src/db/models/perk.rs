//! Perk Model (database side)

use serde::{Deserialize, Serialize};
use shared::models::PerkCategory;
use surrealdb::RecordId;

pub type PerkId = RecordId;

/// Perk record as stored in the database.
///
/// `id` is assigned by the storage layer on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PerkId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: PerkCategory,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub merchant: String,
    /// Whether the perk appears in the public listing
    #[serde(default = "default_true")]
    pub is_public: bool,
}

fn default_true() -> bool {
    true
}

impl From<Perk> for shared::Perk {
    fn from(p: Perk) -> Self {
        shared::Perk {
            id: p.id.map(|t| t.key().to_string()).unwrap_or_default(),
            title: p.title,
            description: p.description,
            category: p.category,
            discount_percent: p.discount_percent,
            merchant: p.merchant,
            is_public: p.is_public,
        }
    }
}
