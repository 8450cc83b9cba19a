use plateguard_domain::{CatalogModel, FoodItem, RecipeItem};

const FOODS: &[(&str, &[&str])] = &[
    ("Scrambled Eggs", &["Eggs", "Butter", "Salt"]),
    ("Cheese Quesadilla", &["Flour tortilla", "Cheddar cheese"]),
    ("Grilled Chicken Salad", &["Chicken breast", "Lettuce", "Tomato"]),
    ("Baked Salmon", &["Salmon fillet", "Lemon", "Dill"]),
    ("Broccoli Stir Fry", &["Broccoli", "Soy sauce", "Garlic"]),
    ("Peanut Butter Toast", &["Bread", "Peanut butter"]),
    ("Fruit Bowl", &["Apple", "Banana", "Grapes"]),
];

const RECIPES: &[(&str, &[&str], &[&str])] = &[
    (
        "Veggie Omelette",
        &["Eggs", "Spinach", "Mushrooms", "Milk"],
        &["Eggs", "Dairy"],
    ),
    (
        "Beef Tacos",
        &["Ground beef", "Corn tortillas", "Salsa"],
        &[],
    ),
    (
        "Pad Thai",
        &["Rice noodles", "Tofu", "Crushed peanuts", "Fish sauce"],
        &["Peanuts", "Fish"],
    ),
    (
        "Chickpea Curry",
        &["Chickpeas", "Coconut milk", "Onion", "Garam masala"],
        &[],
    ),
    (
        "Tuna Pasta Bake",
        &["Pasta", "Tuna", "Cheddar cheese"],
        &["Wheat", "Fish", "Dairy"],
    ),
    (
        "Lentil Soup",
        &["Lentils", "Carrot", "Celery", "Vegetable stock"],
        &[],
    ),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The sample foods and recipes used when no catalog file is given.
pub fn builtin_catalog() -> CatalogModel {
    CatalogModel {
        foods: FOODS
            .iter()
            .map(|(name, ingredients)| FoodItem {
                name: name.to_string(),
                ingredients: owned(ingredients),
            })
            .collect(),
        recipes: RECIPES
            .iter()
            .map(|(name, ingredients, allergens)| RecipeItem {
                name: name.to_string(),
                ingredients: owned(ingredients),
                allergens: owned(allergens),
            })
            .collect(),
    }
}
