//! Fixed keyword lists used to classify ingredients and food names.
//!
//! All entries are lower case; callers lower-case the text they search.

/// Meat and fish keywords checked against ingredient names.
pub const MEAT_FISH_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "fish", "salmon", "tuna", "meat",
];

/// Keywords that mark a food name as non-vegetarian. Only covers the catalog's foods.
pub const NON_VEGETARIAN_FOOD_KEYWORDS: &[&str] = &["chicken", "salmon"];

/// Keywords that mark a food name as an egg dish.
pub const EGG_FOOD_KEYWORDS: &[&str] = &["eggs"];
