//! Perk Client - HTTP client and view models for the Perks service
//!
//! Provides the fetch client for the perk endpoints plus the list and
//! detail view models (loading/error states, filters, category themes).

pub mod config;
pub mod error;
pub mod http;
pub mod theme;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use theme::{CategoryTheme, theme_for};
pub use view::{
    ALL_MERCHANTS, DetailState, ListState, NAME_FILTER_PLACEHOLDER, PerkDetailView, PerkListView,
    PerkSource,
};

// Re-export shared types for convenience
pub use shared::{Perk, PerkCategory};
