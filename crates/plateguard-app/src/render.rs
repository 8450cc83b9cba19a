//! Render use cases and output writers.

use anyhow::Context;
use camino::Utf8Path;
use plateguard_render::RenderableReport;
use plateguard_types::PlateguardReportV1;

use crate::report::serialize_report;

pub fn render_markdown(report: &RenderableReport) -> String {
    plateguard_render::render_markdown(report)
}

pub fn render_badges(report: &RenderableReport) -> Vec<String> {
    plateguard_render::render_badges(report)
}

/// Write text to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))
}

/// Write the report as pretty JSON to `path`, creating parent directories.
pub fn write_report(path: &Utf8Path, report: &PlateguardReportV1) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    let text = String::from_utf8(bytes).context("report is not UTF-8")?;
    write_text(path, &text)
}
