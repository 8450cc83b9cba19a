//! Catalog input: the foods and recipes a check runs over.
//!
//! The JSON shape mirrors the app's static data tables. Missing or `null` lists are
//! read as empty; every item needs a non-blank name.

#![forbid(unsafe_code)]

mod builtin;
mod model;

pub use builtin::builtin_catalog;
pub use model::{CatalogV1, FoodEntry, RecipeEntry, SCHEMA_CATALOG_V1};

use camino::{Utf8Path, Utf8PathBuf};
use plateguard_domain::{CatalogModel, FoodItem, RecipeItem};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("read catalog {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error("{kind} #{index} has an empty name")]
    EmptyName { kind: &'static str, index: usize },
}

/// Parse `catalog.json` text into the domain model.
pub fn parse_catalog_json(input: &str) -> Result<CatalogModel, CatalogError> {
    let raw: CatalogV1 = serde_json::from_str(input)?;
    into_model(raw)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Utf8Path) -> Result<CatalogModel, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_json(&text)
}

fn into_model(raw: CatalogV1) -> Result<CatalogModel, CatalogError> {
    let mut foods = Vec::new();
    for (index, f) in raw.foods.unwrap_or_default().into_iter().enumerate() {
        if f.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { kind: "food", index });
        }
        foods.push(FoodItem {
            name: f.name,
            ingredients: f.ingredients.unwrap_or_default(),
        });
    }

    let mut recipes = Vec::new();
    for (index, r) in raw.recipes.unwrap_or_default().into_iter().enumerate() {
        if r.name.trim().is_empty() {
            return Err(CatalogError::EmptyName {
                kind: "recipe",
                index,
            });
        }
        recipes.push(RecipeItem {
            name: r.name,
            ingredients: r.ingredients.unwrap_or_default(),
            allergens: r.allergens.unwrap_or_default(),
        });
    }

    Ok(CatalogModel { foods, recipes })
}
