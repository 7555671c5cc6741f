//! Perks API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/perks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        // Static segment must be registered alongside /{id}; axum prefers it
        .route("/all", get(handler::list_public))
        .route("/{id}", get(handler::get_by_id))
}
