use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Plateguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let allergies = if report.data.allergies.is_empty() {
        "none".to_string()
    } else {
        report.data.allergies.join(", ")
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Preference: {}\n- Allergies: {}\n- Items: {} scanned / {} flagged\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.dietary_preference,
        allergies,
        report.data.items_scanned,
        report.data.items_flagged,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    let flagged: Vec<_> = report.items.iter().filter(|i| !i.eligible).collect();
    if !flagged.is_empty() {
        out.push_str("## Flagged items\n\n");
        for item in flagged {
            out.push_str(&format!(
                "- {} `{}`: may not be safe for you\n",
                item.kind, item.name
            ));
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev, f.rule_id, f.code, f.message
        ));

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
