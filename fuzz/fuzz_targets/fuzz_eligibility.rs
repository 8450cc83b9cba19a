//! Fuzz target for the eligibility decisions.
//!
//! Checks that arbitrary labels never panic (including non-ASCII case folding)
//! and that an allergen match always blocks, whatever the preference.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_eligibility
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plateguard_domain::{Preferences, is_eligible_by_ingredients, is_food_eligible};
use plateguard_types::DietaryPreference;

#[derive(Arbitrary, Debug)]
struct EligibilityInput {
    preference: u8,
    allergies: Vec<String>,
    ingredients: Vec<String>,
    recipe_allergens: Vec<String>,
    food_name: String,
}

fuzz_target!(|input: EligibilityInput| {
    if input.allergies.len() > 16
        || input.ingredients.len() > 64
        || input.recipe_allergens.len() > 16
        || input.food_name.len() > 512
    {
        return;
    }

    let pref = DietaryPreference::ALL[usize::from(input.preference) % 3];
    let prefs = Preferences::new(pref).with_allergies(input.allergies.iter().cloned());

    let eligible =
        is_eligible_by_ingredients(&prefs, &input.ingredients, &input.recipe_allergens);
    let _ = is_food_eligible(&prefs, &input.food_name, &input.ingredients);

    let allergen_hit = prefs.allergies.iter().any(|allergy| {
        let allergy = allergy.to_lowercase();
        input
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&allergy))
    });
    if allergen_hit {
        assert!(!eligible);
    }
});
