use crate::fingerprint::fingerprint_for_item;
use plateguard_types::{DietaryPreference, Finding, ItemRef, Severity, ids};
use serde_json::json;

pub fn meat_ingredient(
    item: &ItemRef,
    pref: DietaryPreference,
    keyword: &str,
    ingredient: &str,
    severity: Severity,
) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_DIET_MEAT_INGREDIENT.to_string(),
        code: ids::CODE_MEAT_INGREDIENT.to_string(),
        message: format!(
            "{} '{}' is not {}: ingredient '{}' contains '{}'",
            item.kind.as_str(),
            item.name,
            pref,
            ingredient,
            keyword
        ),
        item: Some(item.clone()),
        help: Some("Choose a recipe with a plant-based protein.".to_string()),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_DIET_MEAT_INGREDIENT,
            ids::CODE_MEAT_INGREDIENT,
            item.kind.as_str(),
            &item.name,
            &[keyword, ingredient],
        )),
        data: json!({
            "dietary_preference": pref,
            "keyword": keyword,
            "ingredient": ingredient,
        }),
    }
}

pub fn non_vegetarian_food(
    item: &ItemRef,
    pref: DietaryPreference,
    keyword: &str,
    severity: Severity,
) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_DIET_FOOD_NAME.to_string(),
        code: ids::CODE_NON_VEGETARIAN_FOOD.to_string(),
        message: format!(
            "{} '{}' is not {}: name contains '{}'",
            item.kind.as_str(),
            item.name,
            pref,
            keyword
        ),
        item: Some(item.clone()),
        help: Some("Pick a vegetarian alternative.".to_string()),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_DIET_FOOD_NAME,
            ids::CODE_NON_VEGETARIAN_FOOD,
            item.kind.as_str(),
            &item.name,
            &[keyword],
        )),
        data: json!({
            "dietary_preference": pref,
            "keyword": keyword,
        }),
    }
}

/// Only raised for vegetarian users.
pub fn egg_food(item: &ItemRef, keyword: &str, severity: Severity) -> Finding {
    Finding {
        severity,
        rule_id: ids::RULE_DIET_FOOD_NAME.to_string(),
        code: ids::CODE_EGG_FOOD.to_string(),
        message: format!(
            "{} '{}' is not vegetarian: name contains '{}'",
            item.kind.as_str(),
            item.name,
            keyword
        ),
        item: Some(item.clone()),
        help: Some(
            "Pick an egg-free alternative, or choose the eggtarian preference.".to_string(),
        ),
        fingerprint: Some(fingerprint_for_item(
            ids::RULE_DIET_FOOD_NAME,
            ids::CODE_EGG_FOOD,
            item.kind.as_str(),
            &item.name,
            &[keyword],
        )),
        data: json!({
            "dietary_preference": DietaryPreference::Vegetarian,
            "keyword": keyword,
        }),
    }
}
