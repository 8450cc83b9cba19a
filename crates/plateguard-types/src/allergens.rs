//! The fixed list of allergens offered for selection.
//!
//! The engine accepts any label; this list only drives selection UIs and config
//! validation notes.

pub const ALLERGEN_CATALOG: [&str; 10] = [
    "Peanuts",
    "Tree Nuts",
    "Milk/Dairy",
    "Eggs",
    "Wheat/Gluten",
    "Soy",
    "Fish",
    "Shellfish",
    "Sesame",
    "Mustard",
];

/// Case-insensitive membership test against [`ALLERGEN_CATALOG`].
pub fn is_catalog_allergen(label: &str) -> bool {
    let needle = label.trim();
    ALLERGEN_CATALOG
        .iter()
        .any(|known| known.eq_ignore_ascii_case(needle))
}
