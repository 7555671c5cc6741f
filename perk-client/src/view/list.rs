//! Perk list view model
//!
//! Fetches the full public perk list once and filters it client side.
//! Filter changes never trigger another fetch; the visible subset and
//! the summary line recompute from local state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::view::PerkSource;
use shared::models::Perk;

/// Sentinel option meaning "no merchant filtering"
pub const ALL_MERCHANTS: &str = "All Merchants";

/// Placeholder on the name filter input
pub const NAME_FILTER_PLACEHOLDER: &str = "Enter perk name...";

/// Fixed prefix for user-visible fetch failures
pub const LOAD_ERROR_PREFIX: &str = "Failed to load perks. ";

/// List view states: `Loading -> {Loaded, Failed}`
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Perk>),
    Failed(String),
}

/// View model for the perk directory page
pub struct PerkListView<S: PerkSource> {
    source: Arc<S>,
    state: RwLock<ListState>,
    name_filter: RwLock<String>,
    merchant_filter: RwLock<String>,
    seq: AtomicU64,
}

impl<S: PerkSource> PerkListView<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: RwLock::new(ListState::Loading),
            name_filter: RwLock::new(String::new()),
            merchant_filter: RwLock::new(ALL_MERCHANTS.to_string()),
            seq: AtomicU64::new(0),
        }
    }

    /// Fetch the public perk list, superseding any in-flight load.
    pub async fn load(&self) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            if self.seq.load(Ordering::SeqCst) != seq {
                return;
            }
            *state = ListState::Loading;
        }

        let result = self.source.fetch_all().await;

        let mut state = self.state.write().await;
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("discarding superseded perk list fetch");
            return;
        }

        *state = match result {
            Ok(perks) => ListState::Loaded(perks),
            Err(err) => ListState::Failed(format!("{LOAD_ERROR_PREFIX}{}", err.detail_message())),
        };
    }

    /// Tear the view down; an in-flight fetch can no longer apply.
    pub fn close(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }

    /// Placeholder the empty name filter input shows
    pub fn name_filter_placeholder(&self) -> &'static str {
        NAME_FILTER_PLACEHOLDER
    }

    /// Set the free-text name filter (substring match on title)
    pub async fn set_name_filter(&self, value: impl Into<String>) {
        *self.name_filter.write().await = value.into();
    }

    /// Set the merchant filter; [`ALL_MERCHANTS`] clears it
    pub async fn set_merchant_filter(&self, value: impl Into<String>) {
        *self.merchant_filter.write().await = value.into();
    }

    /// Current state (cloned snapshot)
    pub async fn state(&self) -> ListState {
        self.state.read().await.clone()
    }

    fn matches(perk: &Perk, name_lower: &str, merchant: &str) -> bool {
        let name_ok = name_lower.is_empty() || perk.title.to_lowercase().contains(name_lower);
        let merchant_ok = merchant == ALL_MERCHANTS || perk.merchant == merchant;
        name_ok && merchant_ok
    }

    /// Perks passing both filters, in listing order
    pub async fn visible(&self) -> Vec<Perk> {
        let state = self.state.read().await;
        let ListState::Loaded(perks) = &*state else {
            return Vec::new();
        };
        let name_lower = self.name_filter.read().await.to_lowercase();
        let merchant = self.merchant_filter.read().await.clone();

        perks
            .iter()
            .filter(|p| Self::matches(p, &name_lower, &merchant))
            .cloned()
            .collect()
    }

    /// Summary line above the cards
    pub async fn summary(&self) -> String {
        let state = self.state.read().await;
        match &*state {
            ListState::Loading => "Loading...".to_string(),
            ListState::Failed(msg) => msg.clone(),
            ListState::Loaded(perks) => {
                let name_lower = self.name_filter.read().await.to_lowercase();
                let merchant = self.merchant_filter.read().await.clone();
                let shown = perks
                    .iter()
                    .filter(|p| Self::matches(p, &name_lower, &merchant))
                    .count();
                format!("Showing {} of {} perks", shown, perks.len())
            }
        }
    }

    /// Merchant dropdown options: the sentinel first, then the distinct
    /// merchants from the fetched list, sorted
    pub async fn merchant_options(&self) -> Vec<String> {
        let mut options = vec![ALL_MERCHANTS.to_string()];
        if let ListState::Loaded(perks) = &*self.state.read().await {
            let mut merchants: Vec<String> = perks
                .iter()
                .map(|p| p.merchant.clone())
                .filter(|m| !m.is_empty())
                .collect();
            merchants.sort();
            merchants.dedup();
            options.extend(merchants);
        }
        options
    }

    /// One card per visible perk, queryable by title text
    pub async fn cards(&self) -> Vec<String> {
        self.visible()
            .await
            .iter()
            .map(|p| format!("{} · {} · {}", p.title, p.merchant, p.discount_line()))
            .collect()
    }
}
