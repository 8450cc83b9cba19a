use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "plateguard.config.v1";

/// `plateguard.toml` schema v1.
///
/// User-facing and permissive: every field is optional, unknown preference labels are
/// resolved later rather than rejected here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlateguardConfigV1 {
    /// Optional schema string for tooling (`plateguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict`, `warn`, or `allergy_first`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// `vegetarian`, `eggtarian`, or `non-vegetarian`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<String>,

    /// Allergy labels, usually taken from the allergen catalog.
    #[serde(default)]
    pub allergies: Vec<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Map of rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
