//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - allergen precedence over dietary preference
//! - permissiveness of the non-vegetarian preference
//! - purity (same inputs, same answer) and empty-input safety
//! - catalog evaluation agreeing with the boolean entry points

use crate::eligibility::{
    food_name_restrictions, ingredient_restrictions, is_eligible_by_ingredients, is_food_eligible,
};
use crate::engine::evaluate;
use crate::keywords::MEAT_FISH_KEYWORDS;
use crate::model::{CatalogModel, FoodItem, Preferences, RecipeItem};
use crate::test_support::strict_config;
use plateguard_types::{ALLERGEN_CATALOG, DietaryPreference};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_preference() -> impl Strategy<Value = DietaryPreference> {
    prop_oneof![
        Just(DietaryPreference::Vegetarian),
        Just(DietaryPreference::Eggtarian),
        Just(DietaryPreference::NonVegetarian),
    ]
}

/// Plain words that never contain a meat/fish keyword.
fn arb_plain_ingredient() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{2,10}( [a-z]{2,8})?")
        .unwrap()
        .prop_filter("must not contain a meat keyword", |s| {
            let low = s.to_lowercase();
            !MEAT_FISH_KEYWORDS.iter().any(|k| low.contains(k))
        })
}

fn arb_any_ingredient() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_plain_ingredient(),
        prop::sample::select(MEAT_FISH_KEYWORDS).prop_map(|k| format!("Grilled {k}")),
        Just("Scrambled Eggs".to_string()),
    ]
}

fn arb_catalog_allergen() -> impl Strategy<Value = String> {
    prop::sample::select(ALLERGEN_CATALOG.to_vec()).prop_map(|s| s.to_string())
}

/// Mixed case rendering of `s`, driven by a bit mask.
fn mixed_case(s: &str, mask: u64) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn allergen_in_ingredient_always_blocks(
        pref in arb_preference(),
        allergen in arb_catalog_allergen(),
        mut ingredients in prop::collection::vec(arb_any_ingredient(), 0..6),
        position in any::<prop::sample::Index>(),
        mask in any::<u64>(),
    ) {
        let tainted = format!("Homemade {}", mixed_case(&allergen, mask));
        let at = position.index(ingredients.len() + 1);
        ingredients.insert(at, tainted);

        let prefs = Preferences::new(pref).with_allergy(allergen);
        let no_tags: &[String] = &[];
        prop_assert!(!is_eligible_by_ingredients(&prefs, &ingredients, no_tags));
        let restrictions = ingredient_restrictions(&prefs, &ingredients, no_tags);
        prop_assert!(restrictions.iter().all(|r| r.is_allergen()));
    }

    #[test]
    fn non_vegetarian_accepts_anything_without_allergens(
        ingredients in prop::collection::vec(arb_any_ingredient(), 0..8),
    ) {
        let prefs = Preferences::new(DietaryPreference::NonVegetarian);
        let no_tags: &[String] = &[];
        prop_assert!(is_eligible_by_ingredients(&prefs, &ingredients, no_tags));
    }

    #[test]
    fn vegetarian_and_eggtarian_agree_on_ingredients(
        ingredients in prop::collection::vec(arb_any_ingredient(), 0..8),
    ) {
        let veg = Preferences::new(DietaryPreference::Vegetarian);
        let egg = Preferences::new(DietaryPreference::Eggtarian);
        let no_tags: &[String] = &[];
        prop_assert_eq!(
            is_eligible_by_ingredients(&veg, &ingredients, no_tags),
            is_eligible_by_ingredients(&egg, &ingredients, no_tags)
        );
    }

    #[test]
    fn plain_ingredients_are_vegetarian(
        ingredients in prop::collection::vec(arb_plain_ingredient(), 0..8),
    ) {
        let prefs = Preferences::new(DietaryPreference::Vegetarian);
        let no_tags: &[String] = &[];
        prop_assert!(is_eligible_by_ingredients(&prefs, &ingredients, no_tags));
    }

    #[test]
    fn decisions_are_idempotent(
        pref in arb_preference(),
        allergies in prop::collection::vec(arb_catalog_allergen(), 0..3),
        ingredients in prop::collection::vec(arb_any_ingredient(), 0..6),
        name in arb_any_ingredient(),
    ) {
        let prefs = Preferences::new(pref).with_allergies(allergies);
        let no_tags: &[String] = &[];
        prop_assert_eq!(
            ingredient_restrictions(&prefs, &ingredients, no_tags),
            ingredient_restrictions(&prefs, &ingredients, no_tags)
        );
        prop_assert_eq!(
            food_name_restrictions(&prefs, &name),
            food_name_restrictions(&prefs, &name)
        );
    }

    #[test]
    fn empty_ingredient_list_is_always_eligible(
        pref in arb_preference(),
        allergies in prop::collection::vec(arb_catalog_allergen(), 0..4),
    ) {
        let prefs = Preferences::new(pref).with_allergies(allergies);
        let empty: &[String] = &[];
        prop_assert!(is_eligible_by_ingredients(&prefs, empty, empty));
    }

    #[test]
    fn evaluation_agrees_with_boolean_entry_points(
        pref in arb_preference(),
        allergies in prop::collection::vec(arb_catalog_allergen(), 0..3),
        foods in prop::collection::vec(arb_any_ingredient(), 0..5),
        recipes in prop::collection::vec(
            prop::collection::vec(arb_any_ingredient(), 0..4),
            0..4,
        ),
    ) {
        let prefs = Preferences::new(pref).with_allergies(allergies);
        let model = CatalogModel {
            foods: foods
                .iter()
                .map(|name| FoodItem { name: name.clone(), ingredients: Vec::new() })
                .collect(),
            recipes: recipes
                .iter()
                .enumerate()
                .map(|(i, ingredients)| RecipeItem {
                    name: format!("recipe-{i}"),
                    ingredients: ingredients.clone(),
                    allergens: Vec::new(),
                })
                .collect(),
        };

        let report = evaluate(&model, &prefs, &strict_config());
        prop_assert_eq!(report.items.len(), model.len());

        let expected: Vec<bool> = model
            .foods
            .iter()
            .map(|f| is_food_eligible(&prefs, &f.name, &f.ingredients))
            .chain(model.recipes.iter().map(|r| {
                is_eligible_by_ingredients(&prefs, &r.ingredients, &r.allergens)
            }))
            .collect();
        let actual: Vec<bool> = report.items.iter().map(|i| i.eligible).collect();
        prop_assert_eq!(actual, expected);

        let flagged = report.items.iter().filter(|i| !i.eligible).count();
        prop_assert_eq!(flagged as u32, report.data.items_flagged);
        prop_assert!(report.findings.len() >= flagged);
    }
}
