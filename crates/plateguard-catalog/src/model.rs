use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CATALOG_V1: &str = "plateguard.catalog.v1";

/// `catalog.json` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub foods: Option<Vec<FoodEntry>>,

    #[serde(default)]
    pub recipes: Option<Vec<RecipeEntry>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FoodEntry {
    /// Display name; the only field food eligibility looks at.
    pub name: String,

    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecipeEntry {
    pub name: String,

    #[serde(default)]
    pub ingredients: Option<Vec<String>>,

    /// Allergen tags declared by the recipe author.
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
}
