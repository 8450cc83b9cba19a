//! Embeddable entry point for plateguard.
//!
//! Re-exports the pure eligibility engine together with the types a caller needs to
//! build preferences and read results. No I/O happens behind these functions.

#![forbid(unsafe_code)]

pub use plateguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
pub use plateguard_domain::report::{DomainReport, SeverityCounts};
pub use plateguard_domain::{
    AllergenSet, CatalogModel, FoodItem, Preferences, RecipeItem, Restriction, evaluate,
    food_name_restrictions, ingredient_restrictions, is_eligible_by_ingredients,
    is_food_eligible,
};
pub use plateguard_types::{
    ALLERGEN_CATALOG, DietaryPreference, Finding, ItemKind, ItemVerdict, Severity, Verdict,
    is_catalog_allergen,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_exposes_both_decisions() {
        let prefs = Preferences::new(DietaryPreference::Eggtarian).with_allergy("Fish");

        assert!(is_food_eligible(&prefs, "Scrambled Eggs", &[]));
        assert!(!is_food_eligible(&prefs, "Baked Salmon", &[]));
        assert!(!is_eligible_by_ingredients(&prefs, &["Fish sauce", "Lime"], &[]));
        assert!(is_eligible_by_ingredients(&prefs, &["Tofu", "Lime"], &[]));
    }
}
