//! The `check` use case: evaluate a whole catalog and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use plateguard_settings::{Overrides, PlateguardConfigV1, ResolvedConfig};
use plateguard_types::{PlateguardReportV1, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::{debug, warn};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Catalog file; the built-in sample catalog is used when absent.
    pub catalog_path: Option<&'a Utf8Path>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PlateguardReportV1,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text (empty is allowed, defaults apply).
///
/// Resolution notes are logged as warnings and kept on the returned config.
pub fn resolve_from_text(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        PlateguardConfigV1::default()
    } else {
        plateguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = plateguard_settings::resolve_config(cfg, overrides).context("resolve config")?;
    for note in &resolved.notes {
        warn!(note = %note, "config resolution");
    }
    Ok(resolved)
}

/// Run the check use case: resolve config, load the catalog, evaluate, produce the report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_from_text(input.config_text, input.overrides.clone())?;

    let model = match input.catalog_path {
        Some(path) => {
            plateguard_catalog::load_catalog(path).with_context(|| format!("load catalog {path}"))?
        }
        None => plateguard_catalog::builtin_catalog(),
    };
    debug!(
        foods = model.foods.len(),
        recipes = model.recipes.len(),
        profile = %resolved.effective.profile,
        dietary_preference = %resolved.preferences.dietary_preference,
        allergies = resolved.preferences.allergies.len(),
        "evaluating catalog"
    );

    let domain_report =
        plateguard_domain::evaluate(&model, &resolved.preferences, &resolved.effective);
    let plateguard_domain::report::DomainReport {
        verdict,
        items,
        findings,
        data,
        counts,
    } = domain_report;
    debug!(
        verdict = ?verdict,
        errors = counts.error,
        warnings = counts.warning,
        infos = counts.info,
        "evaluation finished"
    );

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "plateguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        items,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
