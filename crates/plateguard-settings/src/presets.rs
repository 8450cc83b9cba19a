use plateguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use plateguard_types::{Severity, ids};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_FINDINGS: usize = 200;

/// Preset profiles are opinionated defaults. Unknown names get the strict preset.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "allergy_first" => allergy_first_profile(),
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: DEFAULT_MAX_FINDINGS,
        rules: default_rules(Severity::Error, Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: DEFAULT_MAX_FINDINGS,
        rules: default_rules(Severity::Warning, Severity::Warning),
    }
}

fn allergy_first_profile() -> EffectiveConfig {
    // Allergens block; dietary mismatches only warn.
    EffectiveConfig {
        profile: "allergy_first".to_string(),
        fail_on: FailOn::Error,
        max_findings: DEFAULT_MAX_FINDINGS,
        rules: default_rules(Severity::Error, Severity::Warning),
    }
}

fn default_rules(allergen: Severity, diet: Severity) -> BTreeMap<String, RulePolicy> {
    let allergen_rules = ids::ALLERGEN_RULES
        .iter()
        .map(|id| (id.to_string(), RulePolicy::new(allergen)));
    let diet_rules = ids::DIET_RULES
        .iter()
        .map(|id| (id.to_string(), RulePolicy::new(diet)));
    allergen_rules.chain(diet_rules).collect()
}
