use crate::{model::PlateguardConfigV1, presets};
use anyhow::Context;
use plateguard_domain::Preferences;
use plateguard_domain::policy::{EffectiveConfig, FailOn};
use plateguard_types::{DietaryPreference, Severity, is_catalog_allergen, lookup_explanation};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub dietary_preference: Option<String>,
    /// Added to the allergies from the config file.
    pub allergies: Vec<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub preferences: Preferences,
    /// Non-fatal observations made while resolving (fallbacks, dropped labels).
    pub notes: Vec<String>,
}

pub fn resolve_config(
    cfg: PlateguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut notes = Vec::new();

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);
    if effective.profile != profile {
        notes.push(format!(
            "unknown profile '{profile}'; using '{}'",
            effective.profile
        ));
    }

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let Some(entry) = effective.rules.get_mut(rule_id) else {
            let known = lookup_explanation(rule_id).is_some();
            notes.push(if known {
                format!("'{rule_id}' is a finding code, not a rule id; ignored")
            } else {
                format!("unknown rule '{rule_id}' in config; ignored")
            });
            continue;
        };
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let dietary_preference = match overrides
        .dietary_preference
        .as_deref()
        .or(cfg.dietary_preference.as_deref())
    {
        Some(label) => DietaryPreference::parse(label).unwrap_or_else(|| {
            let fallback = DietaryPreference::default();
            notes.push(format!(
                "unknown dietary_preference '{label}'; using '{fallback}'"
            ));
            fallback
        }),
        None => DietaryPreference::default(),
    };

    let mut preferences = Preferences::new(dietary_preference);
    for raw in cfg.allergies.iter().chain(&overrides.allergies) {
        let label = raw.trim();
        if label.is_empty() {
            notes.push("blank allergy label dropped".to_string());
            continue;
        }
        if !is_catalog_allergen(label) {
            notes.push(format!(
                "allergy '{label}' is not in the allergen catalog; matching it literally"
            ));
        }
        preferences.allergies.insert(label);
    }

    Ok(ResolvedConfig {
        effective,
        preferences,
        notes,
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
