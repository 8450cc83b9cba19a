use super::{restriction_findings, run_all};
use crate::eligibility::{food_name_restrictions, ingredient_restrictions};
use crate::model::{CatalogModel, Preferences};
use crate::test_support::{config_with_rule, food, item, recipe, strict_config};
use plateguard_types::{DietaryPreference, ItemKind, Severity, ids};

#[test]
fn allergen_ingredient_finding_carries_match_data() {
    let prefs = Preferences::new(DietaryPreference::NonVegetarian).with_allergy("Peanuts");
    let model = CatalogModel {
        foods: Vec::new(),
        recipes: vec![recipe(
            "Satay Noodles",
            &["Rice noodles", "Peanut sauce", "Crushed peanuts"],
            &[],
        )],
    };

    let mut items = Vec::new();
    let mut out = Vec::new();
    run_all(&model, &prefs, &strict_config(), &mut items, &mut out);

    // "Peanut sauce" does not contain "peanuts"; only the crushed peanuts match.
    assert_eq!(out.len(), 1);
    let finding = &out[0];
    assert_eq!(finding.rule_id, ids::RULE_ALLERGEN_INGREDIENT);
    assert_eq!(finding.code, ids::CODE_ALLERGEN_IN_INGREDIENT);
    assert_eq!(finding.data["allergen"], "Peanuts");
    assert_eq!(finding.data["ingredient"], "Crushed peanuts");
    assert!(finding.message.contains("may not be safe for you"));
    assert!(finding.fingerprint.is_some());
    assert!(!items[0].eligible);
}

#[test]
fn recipe_tag_finding_names_tag_and_allergy() {
    let prefs = Preferences::new(DietaryPreference::Vegetarian).with_allergy("Milk/Dairy");
    let model = CatalogModel {
        foods: Vec::new(),
        recipes: vec![recipe("Mac and Cheese", &["Macaroni", "Cheddar"], &["Dairy"])],
    };

    let mut items = Vec::new();
    let mut out = Vec::new();
    run_all(&model, &prefs, &strict_config(), &mut items, &mut out);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_ALLERGEN_IN_RECIPE_TAG);
    assert_eq!(out[0].data["tag"], "Dairy");
    assert_eq!(out[0].data["allergen"], "Milk/Dairy");
}

#[test]
fn foods_use_name_rules_and_ignore_ingredients() {
    let prefs = Preferences::new(DietaryPreference::Vegetarian).with_allergy("Peanuts");
    let mut trail_mix = food("Trail Mix");
    trail_mix.ingredients = vec!["Peanuts".to_string(), "Raisins".to_string()];
    let model = CatalogModel {
        foods: vec![trail_mix, food("Scrambled Eggs")],
        recipes: Vec::new(),
    };

    let mut items = Vec::new();
    let mut out = Vec::new();
    run_all(&model, &prefs, &strict_config(), &mut items, &mut out);

    assert!(items[0].eligible);
    assert!(!items[1].eligible);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_EGG_FOOD);
    assert_eq!(out[0].item.as_ref().map(|i| i.index), Some(1));
}

#[test]
fn severity_follows_rule_policy() {
    let prefs = Preferences::new(DietaryPreference::Eggtarian);
    let cfg = config_with_rule(ids::RULE_DIET_FOOD_NAME, Severity::Info);
    let restrictions = food_name_restrictions(&prefs, "Chicken Nuggets");
    let target = item(ItemKind::Food, 0, "Chicken Nuggets");

    let findings = restriction_findings(&restrictions, &target, &prefs, &cfg);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Info);
    assert_eq!(findings[0].code, ids::CODE_NON_VEGETARIAN_FOOD);
    assert_eq!(findings[0].data["dietary_preference"], "eggtarian");
    assert_eq!(
        findings[0].message,
        "food 'Chicken Nuggets' is not eggtarian: name contains 'chicken'"
    );
}

#[test]
fn meat_finding_mentions_preference_and_keyword() {
    let prefs = Preferences::new(DietaryPreference::Vegetarian);
    let restrictions = ingredient_restrictions(&prefs, &["Ground Beef"], &[]);
    let target = item(ItemKind::Recipe, 2, "Tacos");

    let findings = restriction_findings(&restrictions, &target, &prefs, &strict_config());
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message,
        "recipe 'Tacos' is not vegetarian: ingredient 'Ground Beef' contains 'beef'"
    );
    assert_eq!(findings[0].data["keyword"], "beef");
}

#[test]
fn fingerprints_differ_per_match() {
    let prefs = Preferences::new(DietaryPreference::NonVegetarian)
        .with_allergies(["Soy", "Sesame"]);
    let restrictions = ingredient_restrictions(&prefs, &["Soy sauce", "Sesame oil"], &[]);
    let target = item(ItemKind::Recipe, 0, "Stir Fry");

    let findings = restriction_findings(&restrictions, &target, &prefs, &strict_config());
    assert_eq!(findings.len(), 2);
    assert_ne!(findings[0].fingerprint, findings[1].fingerprint);
}
