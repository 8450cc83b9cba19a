//! Turns restrictions into report findings.

use crate::eligibility::{Restriction, food_name_restrictions, ingredient_restrictions};
use crate::model::{CatalogModel, Preferences};
use crate::policy::EffectiveConfig;
use plateguard_types::{Finding, ItemKind, ItemRef, ItemVerdict};

mod allergens;
mod dietary;

#[cfg(test)]
mod tests;

/// Evaluate every catalog item: foods by name, recipes by ingredients and tags.
pub fn run_all(
    model: &CatalogModel,
    prefs: &Preferences,
    cfg: &EffectiveConfig,
    items: &mut Vec<ItemVerdict>,
    out: &mut Vec<Finding>,
) {
    for (index, food) in model.foods.iter().enumerate() {
        let item = ItemRef {
            kind: ItemKind::Food,
            index: index as u32,
            name: food.name.clone(),
        };
        let restrictions = food_name_restrictions(prefs, &food.name);
        push_item(item, &restrictions, prefs, cfg, items, out);
    }

    for (index, recipe) in model.recipes.iter().enumerate() {
        let item = ItemRef {
            kind: ItemKind::Recipe,
            index: index as u32,
            name: recipe.name.clone(),
        };
        let restrictions = ingredient_restrictions(prefs, &recipe.ingredients, &recipe.allergens);
        push_item(item, &restrictions, prefs, cfg, items, out);
    }
}

fn push_item(
    item: ItemRef,
    restrictions: &[Restriction],
    prefs: &Preferences,
    cfg: &EffectiveConfig,
    items: &mut Vec<ItemVerdict>,
    out: &mut Vec<Finding>,
) {
    out.extend(restriction_findings(restrictions, &item, prefs, cfg));
    items.push(ItemVerdict {
        kind: item.kind,
        index: item.index,
        name: item.name,
        eligible: restrictions.is_empty(),
    });
}

/// One finding per restriction, in restriction order.
pub fn restriction_findings(
    restrictions: &[Restriction],
    item: &ItemRef,
    prefs: &Preferences,
    cfg: &EffectiveConfig,
) -> Vec<Finding> {
    restrictions
        .iter()
        .map(|r| {
            let severity = cfg.rule_severity(r.rule_id());
            match r {
                Restriction::AllergenInIngredient {
                    allergen,
                    ingredient,
                } => allergens::in_ingredient(item, allergen, ingredient, severity),
                Restriction::AllergenInRecipeTag { allergen, tag } => {
                    allergens::in_recipe_tag(item, allergen, tag, severity)
                }
                Restriction::AllergenInFoodName { allergen } => {
                    allergens::in_food_name(item, allergen, severity)
                }
                Restriction::MeatIngredient {
                    keyword,
                    ingredient,
                } => dietary::meat_ingredient(
                    item,
                    prefs.dietary_preference,
                    keyword,
                    ingredient,
                    severity,
                ),
                Restriction::NonVegetarianFood { keyword } => {
                    dietary::non_vegetarian_food(item, prefs.dietary_preference, keyword, severity)
                }
                Restriction::EggFood { keyword } => dietary::egg_food(item, keyword, severity),
            }
        })
        .collect()
}
