use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's eating restriction. Exactly one is active at a time.
///
/// `NonVegetarian` is the least restrictive value and the default whenever a
/// preference is missing or unrecognized.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Vegetarian,
    Eggtarian,
    #[default]
    NonVegetarian,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 3] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::Eggtarian,
        DietaryPreference::NonVegetarian,
    ];

    /// Strict, case-insensitive parse. Returns `None` for unknown labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "vegetarian" => Some(Self::Vegetarian),
            "eggtarian" => Some(Self::Eggtarian),
            "non-vegetarian" | "non_vegetarian" | "nonvegetarian" => Some(Self::NonVegetarian),
            _ => None,
        }
    }

    /// Lenient parse: unknown labels resolve to [`DietaryPreference::NonVegetarian`].
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Eggtarian => "eggtarian",
            Self::NonVegetarian => "non-vegetarian",
        }
    }

    /// Vegetarian and eggtarian both exclude meat and fish.
    pub fn excludes_meat(self) -> bool {
        matches!(self, Self::Vegetarian | Self::Eggtarian)
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
