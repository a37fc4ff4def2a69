use crate::RenderableReport;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .violations
        .iter()
        .map(|v| {
            let message = format!(
                "[sizeguard:file_too_large] {} is {} bytes, above the {} byte threshold",
                v.path, v.size, report.threshold
            );
            format!(
                "::error file={}::{}",
                escape_property(&v.path),
                escape_data(&message)
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
