//! The eligibility rules.
//!
//! Each decision runs in two steps. The allergen step runs first; if it finds anything,
//! the dietary step is skipped. The boolean entry points are "no restrictions found",
//! so the explanations can never disagree with the decision.
//!
//! Matching is literal, case-insensitive substring search. Two directions are in play
//! and are kept separate on purpose:
//! - ingredients and food names are searched for the allergy label;
//! - an allergy label is searched for each recipe allergen tag.

use crate::keywords::{EGG_FOOD_KEYWORDS, MEAT_FISH_KEYWORDS, NON_VEGETARIAN_FOOD_KEYWORDS};
use crate::model::Preferences;
use plateguard_types::{DietaryPreference, ids};

/// One reason an item is not eligible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Restriction {
    AllergenInIngredient {
        allergen: String,
        ingredient: String,
    },
    AllergenInRecipeTag {
        allergen: String,
        tag: String,
    },
    AllergenInFoodName {
        allergen: String,
    },
    MeatIngredient {
        keyword: &'static str,
        ingredient: String,
    },
    NonVegetarianFood {
        keyword: &'static str,
    },
    EggFood {
        keyword: &'static str,
    },
}

impl Restriction {
    pub fn rule_id(&self) -> &'static str {
        match self {
            Restriction::AllergenInIngredient { .. } => ids::RULE_ALLERGEN_INGREDIENT,
            Restriction::AllergenInRecipeTag { .. } => ids::RULE_ALLERGEN_RECIPE_TAG,
            Restriction::AllergenInFoodName { .. } => ids::RULE_ALLERGEN_FOOD_NAME,
            Restriction::MeatIngredient { .. } => ids::RULE_DIET_MEAT_INGREDIENT,
            Restriction::NonVegetarianFood { .. } | Restriction::EggFood { .. } => {
                ids::RULE_DIET_FOOD_NAME
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Restriction::AllergenInIngredient { .. } => ids::CODE_ALLERGEN_IN_INGREDIENT,
            Restriction::AllergenInRecipeTag { .. } => ids::CODE_ALLERGEN_IN_RECIPE_TAG,
            Restriction::AllergenInFoodName { .. } => ids::CODE_ALLERGEN_IN_FOOD_NAME,
            Restriction::MeatIngredient { .. } => ids::CODE_MEAT_INGREDIENT,
            Restriction::NonVegetarianFood { .. } => ids::CODE_NON_VEGETARIAN_FOOD,
            Restriction::EggFood { .. } => ids::CODE_EGG_FOOD,
        }
    }

    pub fn is_allergen(&self) -> bool {
        matches!(
            self,
            Restriction::AllergenInIngredient { .. }
                | Restriction::AllergenInRecipeTag { .. }
                | Restriction::AllergenInFoodName { .. }
        )
    }
}

/// Restrictions for a recipe-style ingredient list with optional allergen tags.
pub fn ingredient_restrictions<S: AsRef<str>>(
    prefs: &Preferences,
    ingredients: &[S],
    recipe_allergens: &[S],
) -> Vec<Restriction> {
    let lowered: Vec<String> = ingredients
        .iter()
        .map(|i| i.as_ref().to_lowercase())
        .collect();

    let mut out = Vec::new();
    for allergen in &prefs.allergies {
        let needle = allergen.to_lowercase();

        for (raw, low) in ingredients.iter().zip(&lowered) {
            if low.contains(&needle) {
                out.push(Restriction::AllergenInIngredient {
                    allergen: allergen.clone(),
                    ingredient: raw.as_ref().to_string(),
                });
            }
        }

        // Reverse direction: the tag is searched inside the allergy label.
        for tag in recipe_allergens {
            if needle.contains(&tag.as_ref().to_lowercase()) {
                out.push(Restriction::AllergenInRecipeTag {
                    allergen: allergen.clone(),
                    tag: tag.as_ref().to_string(),
                });
            }
        }
    }
    if !out.is_empty() {
        return out;
    }

    if prefs.dietary_preference.excludes_meat() {
        for (raw, low) in ingredients.iter().zip(&lowered) {
            for &keyword in MEAT_FISH_KEYWORDS {
                if low.contains(keyword) {
                    out.push(Restriction::MeatIngredient {
                        keyword,
                        ingredient: raw.as_ref().to_string(),
                    });
                }
            }
        }
    }
    out
}

/// Restrictions for a bare food name.
pub fn food_name_restrictions(prefs: &Preferences, food_name: &str) -> Vec<Restriction> {
    let name = food_name.to_lowercase();

    let mut out: Vec<Restriction> = prefs
        .allergies
        .iter()
        .filter(|allergen| name.contains(&allergen.to_lowercase()))
        .map(|allergen| Restriction::AllergenInFoodName {
            allergen: allergen.clone(),
        })
        .collect();
    if !out.is_empty() {
        return out;
    }

    let excludes_eggs = match prefs.dietary_preference {
        DietaryPreference::NonVegetarian => return out,
        DietaryPreference::Eggtarian => false,
        DietaryPreference::Vegetarian => true,
    };

    for &keyword in NON_VEGETARIAN_FOOD_KEYWORDS {
        if name.contains(keyword) {
            out.push(Restriction::NonVegetarianFood { keyword });
        }
    }
    if excludes_eggs {
        for &keyword in EGG_FOOD_KEYWORDS {
            if name.contains(keyword) {
                out.push(Restriction::EggFood { keyword });
            }
        }
    }
    out
}

/// May a recipe with these ingredients and allergen tags be shown un-flagged?
pub fn is_eligible_by_ingredients<S: AsRef<str>>(
    prefs: &Preferences,
    ingredients: &[S],
    recipe_allergens: &[S],
) -> bool {
    ingredient_restrictions(prefs, ingredients, recipe_allergens).is_empty()
}

/// May a food with this display name be shown un-flagged?
///
/// The ingredient list is accepted for symmetry with [`is_eligible_by_ingredients`];
/// the decision only looks at the name.
pub fn is_food_eligible(prefs: &Preferences, food_name: &str, _ingredients: &[String]) -> bool {
    food_name_restrictions(prefs, food_name).is_empty()
}
