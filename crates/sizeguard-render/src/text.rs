use crate::RenderableReport;

/// Render the stderr message for a failing run.
///
/// Returns `None` when there is nothing to report, so a passing run prints nothing.
pub fn render_violation_message(report: &RenderableReport) -> Option<String> {
    if report.violations.is_empty() {
        return None;
    }

    let mut out = format!(
        "The following tracked files exceed the allowed size threshold of {} bytes:",
        report.threshold
    );
    for v in &report.violations {
        out.push('\n');
        out.push_str(&format!("{}: {} bytes", v.path, v.size));
    }
    Some(out)
}
