//! View models
//!
//! State machines behind the list and detail pages. Both follow the
//! same fetch lifecycle: `loading -> {loaded, failed}`, with a
//! per-invocation sequence number so a superseded fetch can never apply
//! its result.

pub mod detail;
pub mod list;

pub use detail::{DetailState, PerkDetailView};
pub use list::{ALL_MERCHANTS, ListState, NAME_FILTER_PLACEHOLDER, PerkListView};

use crate::ClientResult;
use async_trait::async_trait;
use shared::models::Perk;

/// Data source seam for the views.
///
/// [`crate::HttpClient`] is the production implementation; tests plug in
/// controlled sources to exercise ordering and cancellation.
#[async_trait]
pub trait PerkSource: Send + Sync {
    /// Fetch a single perk by id; `Ok(None)` when the fetch succeeded
    /// but the payload carried no perk
    async fn fetch_perk(&self, id: &str) -> ClientResult<Option<Perk>>;

    /// Fetch the full public perk list
    async fn fetch_all(&self) -> ClientResult<Vec<Perk>>;
}
