//! Perk detail view model
//!
//! Fetches a single perk by id and resolves its category theme. A fetch
//! that is still in flight when a newer `load` is issued, or when the
//! view is closed, must not apply its result: each invocation takes a
//! monotonically increasing sequence number and applies only while it is
//! still the latest.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::theme::{CategoryTheme, theme_for};
use crate::view::PerkSource;
use shared::models::Perk;

/// Fixed prefix for user-visible fetch failures
pub const LOAD_ERROR_PREFIX: &str = "Failed to load perk details. ";

/// Detail view states: `Loading -> {Loaded, NotFound, Failed}`
///
/// `NotFound` is the fetch-succeeded-but-no-perk case; a failed fetch
/// (404 included) lands in `Failed` with the server's message.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Perk),
    NotFound,
    Failed(String),
}

/// View model for the perk detail page
pub struct PerkDetailView<S: PerkSource> {
    source: Arc<S>,
    state: RwLock<DetailState>,
    seq: AtomicU64,
}

impl<S: PerkSource> PerkDetailView<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: RwLock::new(DetailState::Loading),
            seq: AtomicU64::new(0),
        }
    }

    /// Fetch the perk with the given id, exactly one request per call.
    ///
    /// Supersedes any in-flight load; the superseded result is dropped
    /// when it eventually resolves.
    pub async fn load(&self, perk_id: &str) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            if self.seq.load(Ordering::SeqCst) != seq {
                return;
            }
            *state = DetailState::Loading;
        }

        let result = self.source.fetch_perk(perk_id).await;

        let mut state = self.state.write().await;
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(perk_id, "discarding superseded perk fetch");
            return;
        }

        *state = match result {
            Ok(Some(perk)) => DetailState::Loaded(perk),
            Ok(None) => DetailState::NotFound,
            Err(err) => {
                DetailState::Failed(format!("{LOAD_ERROR_PREFIX}{}", err.detail_message()))
            }
        };
    }

    /// Tear the view down before navigating away.
    ///
    /// Bumps the sequence so an in-flight fetch can never apply after
    /// this returns. The back navigation itself belongs to the shell.
    pub fn close(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }

    /// Current state (cloned snapshot)
    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    /// Theme of the loaded perk, when there is one
    pub async fn theme(&self) -> Option<&'static CategoryTheme> {
        match &*self.state.read().await {
            DetailState::Loaded(perk) => Some(theme_for(perk.category)),
            _ => None,
        }
    }

    /// Visible text of the page, one line per element
    pub async fn render(&self) -> Vec<String> {
        match &*self.state.read().await {
            DetailState::Loading => vec!["Loading...".to_string()],
            DetailState::Failed(msg) => vec![msg.clone()],
            DetailState::NotFound => vec!["Perk not found.".to_string()],
            DetailState::Loaded(perk) => {
                let theme = theme_for(perk.category);
                vec![
                    "← Back".to_string(),
                    format!("[{}] {}", theme.icon, perk.title),
                    perk.category.label().to_string(),
                    perk.description.clone(),
                    perk.discount_line(),
                ]
            }
        }
    }
}
