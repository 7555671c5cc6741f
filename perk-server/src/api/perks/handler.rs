//! Perks API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::PerkRepository;
use crate::utils::{AppError, AppResult};
use shared::models::PerkCreate;
use shared::response::{PerkListResponse, PerkResponse};

/// GET /perks/all - list all public perks
pub async fn list_public(
    State(state): State<ServerState>,
) -> AppResult<Json<PerkListResponse>> {
    let repo = PerkRepository::new(state.db.clone());
    let perks = repo.find_all_public().await?;
    Ok(Json(PerkListResponse {
        perks: perks.into_iter().map(Into::into).collect(),
    }))
}

/// GET /perks/:id - fetch a single perk
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PerkResponse>> {
    let repo = PerkRepository::new(state.db.clone());
    let perk = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Perk {} not found", id)))?;
    Ok(Json(PerkResponse { perk: perk.into() }))
}

/// POST /perks - create a perk (seed scripts and admin tooling)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PerkCreate>,
) -> AppResult<Json<PerkResponse>> {
    let repo = PerkRepository::new(state.db.clone());
    let perk = repo.create(payload).await?;
    Ok(Json(PerkResponse { perk: perk.into() }))
}
