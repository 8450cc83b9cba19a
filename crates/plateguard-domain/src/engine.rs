use crate::model::{CatalogModel, Preferences};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::rules;
use plateguard_types::{Finding, ItemVerdict, PlateguardData, Severity, Verdict};

pub fn evaluate(model: &CatalogModel, prefs: &Preferences, cfg: &EffectiveConfig) -> DomainReport {
    let mut items: Vec<ItemVerdict> = Vec::new();
    let mut findings: Vec<Finding> = Vec::new();

    rules::run_all(model, prefs, cfg, &mut items, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let items_eligible = items.iter().filter(|i| i.eligible).count() as u32;
    let data = PlateguardData {
        profile: cfg.profile.clone(),
        dietary_preference: prefs.dietary_preference,
        allergies: prefs.allergies.to_vec(),
        items_scanned: items.len() as u32,
        items_eligible,
        items_flagged: items.len() as u32 - items_eligible,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        items,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) item kind, then item index (missing last)
    // 3) rule_id
    // 4) code
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let item_key = |f: &Finding| match &f.item {
        Some(item) => (0u8, Some(item.kind), item.index),
        None => (1u8, None, u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(item_key(a).cmp(&item_key(b)))
        .then(a.rule_id.cmp(&b.rule_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
