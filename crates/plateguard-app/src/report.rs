use anyhow::Context;
use plateguard_render::{
    RenderableData, RenderableFinding, RenderableItem, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use plateguard_types::{
    DietaryPreference, Finding, PlateguardData, PlateguardReportV1, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PlateguardReportV1> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse plateguard v1 report")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &PlateguardReportV1) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn to_renderable(report: &PlateguardReportV1) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        items: report
            .items
            .iter()
            .map(|i| RenderableItem {
                kind: i.kind.as_str().to_string(),
                name: i.name.clone(),
                eligible: i.eligible,
            })
            .collect(),
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            dietary_preference: report.data.dietary_preference.to_string(),
            allergies: report.data.allergies.clone(),
            items_scanned: report.data.items_scanned,
            items_flagged: report.data.items_flagged,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        rule_id: f.rule_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> PlateguardReportV1 {
    let now = OffsetDateTime::now_utc();
    let data = PlateguardData {
        profile: "unknown".to_string(),
        dietary_preference: DietaryPreference::default(),
        allergies: Vec::new(),
        items_scanned: 0,
        items_eligible: 0,
        items_flagged: 0,
        findings_total: 1,
        findings_emitted: 1,
        truncated_reason: None,
    };

    PlateguardReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "plateguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        items: Vec::new(),
        findings: vec![Finding {
            severity: Severity::Error,
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            item: None,
            help: Some("Fix the tool error and re-run plateguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data,
    }
}
