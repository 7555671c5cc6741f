//! Perk Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Perk;
use shared::models::PerkCreate;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "perk";

#[derive(Clone)]
pub struct PerkRepository {
    base: BaseRepository,
}

impl PerkRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all public perks ordered by title
    pub async fn find_all_public(&self) -> RepoResult<Vec<Perk>> {
        let perks: Vec<Perk> = self
            .base
            .db()
            .query("SELECT * FROM perk WHERE is_public = true ORDER BY title")
            .await?
            .take(0)?;
        Ok(perks)
    }

    /// Find perk by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Perk>> {
        // Tolerate ids carrying the table prefix ("perk:xxx" -> "xxx")
        let pure_id = strip_table_prefix(TABLE, id);
        let perk: Option<Perk> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(perk)
    }

    /// Create a new perk
    pub async fn create(&self, data: PerkCreate) -> RepoResult<Perk> {
        if data.title.trim().is_empty() {
            return Err(RepoError::Validation(
                "Perk title must not be empty".to_string(),
            ));
        }

        let perk = Perk {
            id: None,
            title: data.title,
            description: data.description,
            category: data.category,
            discount_percent: data.discount_percent,
            merchant: data.merchant,
            is_public: data.is_public.unwrap_or(true),
        };

        let created: Option<Perk> = self.base.db().create(TABLE).content(perk).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create perk".to_string()))
    }
}
