//! Database-side models

pub mod perk;

pub use perk::{Perk, PerkId};
