//! Perk Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed category set used for presentation theming.
///
/// Unknown or absent wire values fall back to [`PerkCategory::Other`],
/// so old clients keep rendering when the backend grows a new category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerkCategory {
    Food,
    Tech,
    Travel,
    Fitness,
    #[default]
    #[serde(other)]
    Other,
}

impl PerkCategory {
    /// Capitalized label for display ("food" -> "Food")
    pub fn label(&self) -> &'static str {
        match self {
            PerkCategory::Food => "Food",
            PerkCategory::Tech => "Tech",
            PerkCategory::Travel => "Travel",
            PerkCategory::Fitness => "Fitness",
            PerkCategory::Other => "Other",
        }
    }
}

impl fmt::Display for PerkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Perk entity
///
/// Read-only from the client's perspective; documents are created and
/// maintained in the backing store (seed scripts, create endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: PerkCategory,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub merchant: String,
    #[serde(default = "default_true")]
    pub is_public: bool,
}

fn default_true() -> bool {
    true
}

impl Perk {
    /// Discount line rendered on the detail page
    pub fn discount_line(&self) -> String {
        format!("Discount: {}%", self.discount_percent)
    }
}

/// Create perk payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: PerkCategory,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub merchant: String,
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_falls_back_to_other() {
        let perk: Perk = serde_json::from_str(
            r#"{"id":"p1","title":"Mystery","category":"gardening"}"#,
        )
        .unwrap();
        assert_eq!(perk.category, PerkCategory::Other);
    }

    #[test]
    fn missing_category_falls_back_to_other() {
        let perk: Perk = serde_json::from_str(r#"{"id":"p1","title":"Mystery"}"#).unwrap();
        assert_eq!(perk.category, PerkCategory::Other);
        assert!(perk.is_public);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let perk = Perk {
            id: "p1".into(),
            title: "Free Coffee".into(),
            description: String::new(),
            category: PerkCategory::Food,
            discount_percent: 10.0,
            merchant: "Acme".into(),
            is_public: true,
        };
        let json = serde_json::to_value(&perk).unwrap();
        assert_eq!(json["discountPercent"], 10.0);
        assert_eq!(json["category"], "food");
    }

    #[test]
    fn discount_line_formats_whole_numbers_without_decimals() {
        let perk: Perk =
            serde_json::from_str(r#"{"id":"p1","title":"T","discountPercent":10}"#).unwrap();
        assert_eq!(perk.discount_line(), "Discount: 10%");
    }

    #[test]
    fn category_label_is_capitalized() {
        assert_eq!(PerkCategory::Food.label(), "Food");
        assert_eq!(PerkCategory::Other.label(), "Other");
    }
}
