//! Category themes
//!
//! Presentation attributes keyed by perk category. `theme_for` is total
//! over the closed category set; the `Other` arm doubles as the fallback
//! because unknown wire values already deserialize to
//! [`PerkCategory::Other`].

use shared::models::PerkCategory;

/// Bundle of presentation attributes for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTheme {
    /// Background gradient classes
    pub gradient: &'static str,
    /// Card border color class
    pub border: &'static str,
    /// Category badge classes
    pub badge: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Icon color class
    pub icon_color: &'static str,
    /// Accent text color class
    pub accent_text: &'static str,
}

pub const FOOD: CategoryTheme = CategoryTheme {
    gradient: "from-orange-50 to-red-50",
    border: "border-orange-200",
    badge: "bg-orange-100 text-orange-800",
    icon: "restaurant",
    icon_color: "text-orange-500",
    accent_text: "text-orange-600",
};

pub const TECH: CategoryTheme = CategoryTheme {
    gradient: "from-blue-50 to-indigo-50",
    border: "border-blue-200",
    badge: "bg-blue-100 text-blue-800",
    icon: "computer",
    icon_color: "text-blue-500",
    accent_text: "text-blue-600",
};

pub const TRAVEL: CategoryTheme = CategoryTheme {
    gradient: "from-purple-50 to-pink-50",
    border: "border-purple-200",
    badge: "bg-purple-100 text-purple-800",
    icon: "flight",
    icon_color: "text-purple-500",
    accent_text: "text-purple-600",
};

pub const FITNESS: CategoryTheme = CategoryTheme {
    gradient: "from-green-50 to-emerald-50",
    border: "border-green-200",
    badge: "bg-green-100 text-green-800",
    icon: "gym",
    icon_color: "text-green-500",
    accent_text: "text-green-600",
};

pub const OTHER: CategoryTheme = CategoryTheme {
    gradient: "from-gray-50 to-slate-50",
    border: "border-gray-200",
    badge: "bg-gray-100 text-gray-800",
    icon: "giftcard",
    icon_color: "text-gray-500",
    accent_text: "text-gray-600",
};

/// Resolve the theme for a category
pub fn theme_for(category: PerkCategory) -> &'static CategoryTheme {
    match category {
        PerkCategory::Food => &FOOD,
        PerkCategory::Tech => &TECH,
        PerkCategory::Travel => &TRAVEL,
        PerkCategory::Fitness => &FITNESS,
        PerkCategory::Other => &OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_category_resolves_to_other_theme() {
        let category: PerkCategory = serde_json::from_str("\"gardening\"").unwrap();
        assert_eq!(theme_for(category), &OTHER);
    }

    #[test]
    fn each_named_category_has_its_own_theme() {
        assert_eq!(theme_for(PerkCategory::Food).icon, "restaurant");
        assert_eq!(theme_for(PerkCategory::Tech).icon, "computer");
        assert_eq!(theme_for(PerkCategory::Travel).icon, "flight");
        assert_eq!(theme_for(PerkCategory::Fitness).icon, "gym");
        assert_eq!(theme_for(PerkCategory::Other).icon, "giftcard");
    }
}
