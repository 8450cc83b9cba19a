use crate::fingerprint::fingerprint_for_item;
use plateguard_types::{Finding, ItemRef, Severity, ids};
use serde_json::json;

pub fn in_ingredient(
    item: &ItemRef,
    allergen: &str,
    ingredient: &str,
    severity: Severity,
) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_ALLERGEN_INGREDIENT.to_string(),
        code: ids::CODE_ALLERGEN_IN_INGREDIENT.to_string(),
        message: format!(
            "{} '{}' may not be safe for you: ingredient '{}' contains allergen '{}'",
            item.kind.as_str(),
            item.name,
            ingredient,
            allergen
        ),
        item: Some(item.clone()),
        help: Some("Pick a recipe without this ingredient.".to_string()),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_ALLERGEN_INGREDIENT,
            ids::CODE_ALLERGEN_IN_INGREDIENT,
            item.kind.as_str(),
            &item.name,
            &[allergen, ingredient],
        )),
        data: json!({
            "allergen": allergen,
            "ingredient": ingredient,
        }),
    }
}

pub fn in_recipe_tag(item: &ItemRef, allergen: &str, tag: &str, severity: Severity) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_ALLERGEN_RECIPE_TAG.to_string(),
        code: ids::CODE_ALLERGEN_IN_RECIPE_TAG.to_string(),
        message: format!(
            "{} '{}' may not be safe for you: tagged allergen '{}' matches allergy '{}'",
            item.kind.as_str(),
            item.name,
            tag,
            allergen
        ),
        item: Some(item.clone()),
        help: Some("This recipe is tagged with an allergen from your list.".to_string()),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_ALLERGEN_RECIPE_TAG,
            ids::CODE_ALLERGEN_IN_RECIPE_TAG,
            item.kind.as_str(),
            &item.name,
            &[allergen, tag],
        )),
        data: json!({
            "allergen": allergen,
            "tag": tag,
        }),
    }
}

pub fn in_food_name(item: &ItemRef, allergen: &str, severity: Severity) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_ALLERGEN_FOOD_NAME.to_string(),
        code: ids::CODE_ALLERGEN_IN_FOOD_NAME.to_string(),
        message: format!(
            "{} '{}' may not be safe for you: name contains allergen '{}'",
            item.kind.as_str(),
            item.name,
            allergen
        ),
        item: Some(item.clone()),
        help: Some("Pick a different food.".to_string()),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_ALLERGEN_FOOD_NAME,
            ids::CODE_ALLERGEN_IN_FOOD_NAME,
            item.kind.as_str(),
            &item.name,
            &[allergen],
        )),
        data: json!({
            "allergen": allergen,
        }),
    }
}
