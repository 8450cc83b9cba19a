//! Pure eligibility evaluation (no IO).
//!
//! Input: user preferences plus a food name, an ingredient list, or a whole catalog.
//! Output: a boolean decision, the restrictions behind it, or findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod eligibility;
pub mod keywords;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use eligibility::{
    Restriction, food_name_restrictions, ingredient_restrictions, is_eligible_by_ingredients,
    is_food_eligible,
};
pub use engine::evaluate;
pub use model::{AllergenSet, CatalogModel, FoodItem, Preferences, RecipeItem};
