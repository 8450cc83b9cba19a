use crate::RenderableReport;

/// One line per item, in report order: `[ok] <name>` or `[!!] <name> (...)`.
///
/// This is the text form of the warning indicator shown next to a food card.
pub fn render_badges(report: &RenderableReport) -> Vec<String> {
    report
        .items
        .iter()
        .map(|item| {
            if item.eligible {
                format!("[ok] {}", item.name)
            } else {
                format!("[!!] {} (may not be safe for you)", item.name)
            }
        })
        .collect()
}
