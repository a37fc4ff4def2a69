//! Receipt helpers: serialization, runtime-error receipts, and conversion for renderers.

use anyhow::Context;
use sizeguard_domain::report::Violation;
use sizeguard_render::{RenderableReport, RenderableViolation};
use sizeguard_types::{
    Finding, SCHEMA_REPORT_V1, Severity, SizeguardData, SizeguardReport, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &SizeguardReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

/// Receipt describing a run that aborted before evaluation finished.
pub fn runtime_error_report(message: &str) -> SizeguardReport {
    let now = OffsetDateTime::now_utc();
    SizeguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some(
                "Run inside a git work tree with `git` on PATH and a valid configuration."
                    .to_string(),
            ),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: SizeguardData::default(),
    }
}

pub fn to_renderable(threshold: u64, violations: &[Violation]) -> RenderableReport {
    RenderableReport {
        threshold,
        violations: violations
            .iter()
            .map(|v| RenderableViolation {
                path: v.path.as_str().to_string(),
                size: v.size,
            })
            .collect(),
    }
}
