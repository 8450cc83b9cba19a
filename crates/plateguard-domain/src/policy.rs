use plateguard_types::Severity;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// How findings of one rule are reported. Rules never change eligibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub severity: Severity,
}

impl RulePolicy {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    /// Severity for `rule_id`; rules without a policy report as errors.
    pub fn rule_severity(&self, rule_id: &str) -> Severity {
        self.rules
            .get(rule_id)
            .map(|p| p.severity)
            .unwrap_or(Severity::Error)
    }
}
