//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and when it fires.
    pub description: &'static str,
    /// What a user or catalog author can do about it.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would produce a finding.
    pub before: &'static str,
    /// Input that does not.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_ALLERGEN_INGREDIENT => Some(explain_allergen_ingredient()),
        ids::RULE_ALLERGEN_RECIPE_TAG => Some(explain_allergen_recipe_tag()),
        ids::RULE_ALLERGEN_FOOD_NAME => Some(explain_allergen_food_name()),
        ids::RULE_DIET_MEAT_INGREDIENT => Some(explain_meat_ingredient()),
        ids::RULE_DIET_FOOD_NAME => Some(explain_diet_food_name()),

        // Codes
        ids::CODE_ALLERGEN_IN_INGREDIENT => Some(explain_allergen_ingredient()),
        ids::CODE_ALLERGEN_IN_RECIPE_TAG => Some(explain_allergen_recipe_tag()),
        ids::CODE_ALLERGEN_IN_FOOD_NAME => Some(explain_allergen_food_name()),
        ids::CODE_MEAT_INGREDIENT => Some(explain_meat_ingredient()),
        ids::CODE_NON_VEGETARIAN_FOOD => Some(explain_non_vegetarian_food()),
        ids::CODE_EGG_FOOD => Some(explain_egg_food()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_ALLERGEN_INGREDIENT,
        ids::RULE_ALLERGEN_RECIPE_TAG,
        ids::RULE_ALLERGEN_FOOD_NAME,
        ids::RULE_DIET_MEAT_INGREDIENT,
        ids::RULE_DIET_FOOD_NAME,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ALLERGEN_IN_INGREDIENT,
        ids::CODE_ALLERGEN_IN_RECIPE_TAG,
        ids::CODE_ALLERGEN_IN_FOOD_NAME,
        ids::CODE_MEAT_INGREDIENT,
        ids::CODE_NON_VEGETARIAN_FOOD,
        ids::CODE_EGG_FOOD,
    ]
}

fn explain_allergen_ingredient() -> Explanation {
    Explanation {
        title: "Allergen In Ingredient",
        description: "\
Flags a recipe when one of its ingredients contains a label from the user's allergy list.

Matching is a case-insensitive substring test of the allergy label inside each
ingredient name. It is literal: an allergy of `Peanuts` matches `Crushed peanuts`,
but an allergy of `Milk/Dairy` does not match `Cheddar cheese`.

Allergen matches are decided before dietary rules and always make the item ineligible.",
        remediation: "\
- Choose a recipe without the ingredient, or
- Record allergies using the words that appear in ingredient names (for example
  `Cheese` in addition to `Milk/Dairy`) so the literal match can find them.",
        examples: ExamplePair {
            before: r#"allergies = ["Peanuts"]
recipe ingredients: ["Peanut butter", "Bread"]"#,
            after: r#"allergies = ["Peanuts"]
recipe ingredients: ["Sunflower seed butter", "Bread"]"#,
        },
    }
}

fn explain_allergen_recipe_tag() -> Explanation {
    Explanation {
        title: "Allergen Recipe Tag",
        description: "\
Flags a recipe whose explicit allergen tags match the user's allergy list.

The match runs in the opposite direction from the ingredient rule: the recipe's tag
is searched for inside the user's allergy label (case-insensitive). A recipe tagged
`Dairy` therefore matches an allergy of `Milk/Dairy`, while a recipe tagged
`Milk/Dairy` does not match an allergy of `Dairy`.

This asymmetry is kept for compatibility with existing catalogs.",
        remediation: "\
Tag recipes with short, general allergen words (`Dairy`, `Nuts`, `Gluten`) so they
are contained in the allergy labels users pick from the catalog.",
        examples: ExamplePair {
            before: r#"allergies = ["Milk/Dairy"]
recipe allergens: ["Dairy"]"#,
            after: r#"allergies = ["Milk/Dairy"]
recipe allergens: ["Sesame"]"#,
        },
    }
}

fn explain_allergen_food_name() -> Explanation {
    Explanation {
        title: "Allergen In Food Name",
        description: "\
Flags a food whose display name contains a label from the user's allergy list
(case-insensitive substring). Ingredient lists of foods are not consulted.",
        remediation: "\
Pick a different food, or rename catalog entries so their names do not mention
ingredients they no longer contain.",
        examples: ExamplePair {
            before: r#"allergies = ["Cheese"]
food: "Cheese Quesadilla""#,
            after: r#"allergies = ["Cheese"]
food: "Bean Quesadilla""#,
        },
    }
}

fn explain_meat_ingredient() -> Explanation {
    Explanation {
        title: "Meat Or Fish Ingredient",
        description: "\
Flags a recipe for vegetarian and eggtarian users when an ingredient contains one of
the meat/fish keywords: chicken, beef, pork, lamb, fish, salmon, tuna, meat.

Eggs are never excluded by this rule, so vegetarian and eggtarian users get the same
result for ingredient lists. Keyword matching is literal, so `Vegan chicken
substitute` is flagged as well.",
        remediation: "\
Choose a recipe with a plant-based protein, or switch the dietary preference to
non-vegetarian if meat is acceptable.",
        examples: ExamplePair {
            before: r#"dietary_preference = "vegetarian"
recipe ingredients: ["Grilled Chicken Breast", "Rice"]"#,
            after: r#"dietary_preference = "vegetarian"
recipe ingredients: ["Grilled Tofu", "Rice"]"#,
        },
    }
}

fn explain_diet_food_name() -> Explanation {
    Explanation {
        title: "Dietary Food Name",
        description: "\
Flags a food whose name marks it as unsuitable for the user's dietary preference.

- vegetarian: names containing `chicken`, `salmon` or `eggs`
- eggtarian: names containing `chicken` or `salmon`
- non-vegetarian: never flagged

The keyword lists are deliberately small and only cover the foods in the catalog.",
        remediation: "\
Pick a food without the keyword, or adjust the dietary preference.",
        examples: ExamplePair {
            before: r#"dietary_preference = "vegetarian"
food: "Scrambled Eggs""#,
            after: r#"dietary_preference = "eggtarian"
food: "Scrambled Eggs""#,
        },
    }
}

fn explain_non_vegetarian_food() -> Explanation {
    Explanation {
        title: "Non-Vegetarian Food",
        description: "\
The food name contains `chicken` or `salmon`, which excludes it for vegetarian and
eggtarian users.",
        remediation: "\
Pick a vegetarian alternative, or switch the dietary preference to non-vegetarian.",
        examples: ExamplePair {
            before: r#"dietary_preference = "eggtarian"
food: "Baked Salmon""#,
            after: r#"dietary_preference = "eggtarian"
food: "Veggie Omelette with eggs""#,
        },
    }
}

fn explain_egg_food() -> Explanation {
    Explanation {
        title: "Egg Food",
        description: "\
The food name contains `eggs`, which excludes it for vegetarian users. Eggtarian and
non-vegetarian users may eat it.",
        remediation: "\
Pick an egg-free alternative, or switch the dietary preference to eggtarian.",
        examples: ExamplePair {
            before: r#"dietary_preference = "vegetarian"
food: "Scrambled Eggs""#,
            after: r#"dietary_preference = "vegetarian"
food: "Scrambled Tofu""#,
        },
    }
}
