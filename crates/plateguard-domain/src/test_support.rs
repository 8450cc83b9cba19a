use crate::model::{CatalogModel, FoodItem, RecipeItem};
use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use plateguard_types::{ItemKind, ItemRef, Severity, ids};
use std::collections::BTreeMap;

pub fn food(name: &str) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        ingredients: Vec::new(),
    }
}

pub fn recipe(name: &str, ingredients: &[&str], allergens: &[&str]) -> RecipeItem {
    RecipeItem {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
    }
}

/// Foods by name; recipes are named `recipe-<n>` and carry only ingredients.
pub fn catalog(foods: Vec<&str>, recipes: Vec<Vec<&str>>) -> CatalogModel {
    CatalogModel {
        foods: foods.into_iter().map(food).collect(),
        recipes: recipes
            .iter()
            .enumerate()
            .map(|(i, ingredients)| recipe(&format!("recipe-{i}"), ingredients, &[]))
            .collect(),
    }
}

pub fn item(kind: ItemKind, index: u32, name: &str) -> ItemRef {
    ItemRef {
        kind,
        index,
        name: name.to_string(),
    }
}

pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::new(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}

pub fn strict_config() -> EffectiveConfig {
    let rules = ids::ALLERGEN_RULES
        .iter()
        .chain(ids::DIET_RULES)
        .map(|id| (id.to_string(), RulePolicy::new(Severity::Error)))
        .collect();
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}
