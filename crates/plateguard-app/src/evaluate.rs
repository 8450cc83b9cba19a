//! Single-item decisions: one food name or one ingredient list, with the reasons.

use plateguard_domain::rules::restriction_findings;
use plateguard_domain::{food_name_restrictions, ingredient_restrictions};
use plateguard_settings::ResolvedConfig;
use plateguard_types::{Finding, ItemKind, ItemRef};
use tracing::debug;

/// Decision for one item plus the findings that explain it.
#[derive(Clone, Debug)]
pub struct ItemOutcome {
    pub item: ItemRef,
    pub eligible: bool,
    pub findings: Vec<Finding>,
}

/// Decide a food by its display name. `ingredients` is recorded but not consulted.
pub fn run_food_check(resolved: &ResolvedConfig, name: &str, ingredients: &[String]) -> ItemOutcome {
    let prefs = &resolved.preferences;
    let restrictions = food_name_restrictions(prefs, name);
    let eligible = restrictions.is_empty();
    debug_assert_eq!(
        eligible,
        plateguard_domain::is_food_eligible(prefs, name, ingredients)
    );
    debug!(food = name, ingredients = ingredients.len(), eligible, "food decision");

    let item = ItemRef {
        kind: ItemKind::Food,
        index: 0,
        name: name.to_string(),
    };
    let findings = restriction_findings(&restrictions, &item, prefs, &resolved.effective);
    ItemOutcome {
        item,
        eligible,
        findings,
    }
}

/// Decide an ad-hoc recipe from its ingredients and allergen tags.
pub fn run_recipe_check(
    resolved: &ResolvedConfig,
    ingredients: &[String],
    allergens: &[String],
) -> ItemOutcome {
    let prefs = &resolved.preferences;
    let restrictions = ingredient_restrictions(prefs, ingredients, allergens);
    let eligible = restrictions.is_empty();
    debug!(
        ingredients = ingredients.len(),
        allergens = allergens.len(),
        eligible,
        "recipe decision"
    );

    let item = ItemRef {
        kind: ItemKind::Recipe,
        index: 0,
        name: "recipe".to_string(),
    };
    let findings = restriction_findings(&restrictions, &item, prefs, &resolved.effective);
    ItemOutcome {
        item,
        eligible,
        findings,
    }
}
