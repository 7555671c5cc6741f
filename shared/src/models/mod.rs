//! Data models shared across the workspace

pub mod perk;

pub use perk::{Perk, PerkCategory, PerkCreate};
