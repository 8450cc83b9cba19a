use plateguard_types::DietaryPreference;
use std::collections::BTreeSet;

/// The user's allergy labels. Exact-string set semantics; matching against food text
/// is case-insensitive and happens in the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllergenSet(BTreeSet<String>);

impl AllergenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the label was not present before.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn remove(&mut self, label: &str) -> bool {
        self.0.remove(label)
    }

    /// Flip membership of `label`. Returns `true` if the label is present afterwards.
    pub fn toggle(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.0.remove(&label) {
            false
        } else {
            self.0.insert(label);
            true
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for AllergenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a AllergenSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything the engine needs to know about a user. Passed by reference on every call;
/// the engine never keeps or mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub allergies: AllergenSet,
    pub dietary_preference: DietaryPreference,
}

impl Preferences {
    pub fn new(dietary_preference: DietaryPreference) -> Self {
        Self {
            allergies: AllergenSet::new(),
            dietary_preference,
        }
    }

    pub fn with_allergy(mut self, label: impl Into<String>) -> Self {
        self.allergies.insert(label);
        self
    }

    pub fn with_allergies<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.allergies.insert(label);
        }
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodItem {
    pub name: String,
    pub ingredients: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeItem {
    pub name: String,
    pub ingredients: Vec<String>,
    /// Allergen tags declared on the recipe itself.
    pub allergens: Vec<String>,
}

/// All items in scope for one evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogModel {
    pub foods: Vec<FoodItem>,
    pub recipes: Vec<RecipeItem>,
}

impl CatalogModel {
    pub fn len(&self) -> usize {
        self.foods.len() + self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.recipes.is_empty()
    }
}
