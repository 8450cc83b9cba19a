//! Stable identifiers for rules and finding codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_ALLERGEN_INGREDIENT: &str = "allergen.ingredient";
pub const RULE_ALLERGEN_RECIPE_TAG: &str = "allergen.recipe_tag";
pub const RULE_ALLERGEN_FOOD_NAME: &str = "allergen.food_name";
pub const RULE_DIET_MEAT_INGREDIENT: &str = "diet.meat_ingredient";
pub const RULE_DIET_FOOD_NAME: &str = "diet.food_name";

// Codes: allergen.*
pub const CODE_ALLERGEN_IN_INGREDIENT: &str = "allergen_in_ingredient";
pub const CODE_ALLERGEN_IN_RECIPE_TAG: &str = "allergen_in_recipe_tag";
pub const CODE_ALLERGEN_IN_FOOD_NAME: &str = "allergen_in_food_name";

// Codes: diet.meat_ingredient
pub const CODE_MEAT_INGREDIENT: &str = "meat_ingredient";

// Codes: diet.food_name
pub const CODE_NON_VEGETARIAN_FOOD: &str = "non_vegetarian_food";
pub const CODE_EGG_FOOD: &str = "egg_food";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Rule ids whose findings come from the allergen step.
pub const ALLERGEN_RULES: &[&str] = &[
    RULE_ALLERGEN_INGREDIENT,
    RULE_ALLERGEN_RECIPE_TAG,
    RULE_ALLERGEN_FOOD_NAME,
];

/// Rule ids whose findings come from the dietary step.
pub const DIET_RULES: &[&str] = &[RULE_DIET_MEAT_INGREDIENT, RULE_DIET_FOOD_NAME];
