//! Render use cases: terminal message, GitHub annotations, and artifact writes.

use crate::check::CheckOutput;
use crate::report::{serialize_report, to_renderable};
use anyhow::Context;
use camino::Utf8Path;
use sizeguard_types::SizeguardReport;

/// The stderr message for a failing run, or `None` when every file complies.
pub fn render_violation_message(output: &CheckOutput) -> Option<String> {
    sizeguard_render::render_violation_message(&to_renderable(
        output.policy.threshold,
        &output.violations,
    ))
}

pub fn render_annotations(output: &CheckOutput) -> Vec<String> {
    sizeguard_render::render_github_annotations(&to_renderable(
        output.policy.threshold,
        &output.violations,
    ))
}

pub fn write_report(path: &Utf8Path, report: &SizeguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {path}"))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}
