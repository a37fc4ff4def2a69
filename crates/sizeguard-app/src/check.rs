//! The `check` use case: resolve settings, list and measure tracked files, evaluate, report.

use anyhow::Context;
use camino::Utf8Path;
use sizeguard_domain::policy::GatePolicy;
use sizeguard_domain::report::Violation;
use sizeguard_repo::{TrackedFileLister, load_allowlist_file, measure_tracked_files, resolve_repo_path};
use sizeguard_settings::{Overrides, SizeguardConfigV1};
use sizeguard_types::{
    SCHEMA_REPORT_V1, SizeguardData, SizeguardReport, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the check use case.
#[derive(Clone, Copy)]
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: &'a Overrides,
    /// Source of tracked paths.
    pub lister: &'a dyn TrackedFileLister,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated receipt.
    pub report: SizeguardReport,
    /// Violations in listing order.
    pub violations: Vec<Violation>,
    /// The policy the files were evaluated against.
    pub policy: GatePolicy,
}

/// Run the check use case.
///
/// Settings are fully resolved (and globs validated) before the tracked-file listing is
/// requested. A listing failure aborts the run without a partial report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        SizeguardConfigV1::default()
    } else {
        sizeguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = sizeguard_settings::resolve_config(cfg, input.overrides.clone());

    let allowlist_path = resolve_repo_path(input.repo_root, &resolved.allowlist_file);
    debug!(
        file = %allowlist_path,
        explicit = resolved.allowlist_explicit,
        "loading allowlist file"
    );
    let file_patterns = load_allowlist_file(&allowlist_path)?;
    let policy = resolved.into_policy(file_patterns)?;
    let matcher = policy.glob_matcher().context("compile allow patterns")?;
    debug!(threshold = policy.threshold, allow = ?policy.allow, "resolved policy");

    let listed = input
        .lister
        .list_tracked_files()
        .context("list tracked files")?;
    let files_listed = listed.len() as u64;

    let measurement =
        measure_tracked_files(input.repo_root, listed).context("measure tracked files")?;

    let domain = sizeguard_domain::evaluate(&measurement.files, &policy, &matcher);
    info!(
        verdict = ?domain.verdict,
        scanned = domain.counts.scanned,
        allowed = domain.counts.allowed,
        violations = domain.counts.violations,
        missing = measurement.missing.len(),
        "size check finished"
    );

    let report = SizeguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain.verdict,
        findings: domain.findings,
        data: SizeguardData {
            threshold: policy.threshold,
            allow_patterns: policy.allow.clone(),
            files_listed,
            files_scanned: domain.counts.scanned,
            files_missing: measurement.missing.len() as u64,
            files_allowed: domain.counts.allowed,
            violations: domain.counts.violations,
        },
    };

    Ok(CheckOutput {
        report,
        violations: domain.violations,
        policy,
    })
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
