use crate::fingerprint::fingerprint_for_path;
use crate::matcher::PathMatcher;
use crate::model::{Classification, TrackedFile};
use crate::policy::GatePolicy;
use crate::report::{DomainReport, GateCounts, Violation};
use serde_json::json;
use sizeguard_types::{Finding, Location, Severity, Verdict, ids};

/// Classify one file. The allowlist is only consulted for oversized files.
pub fn classify(file: &TrackedFile, policy: &GatePolicy, matcher: &dyn PathMatcher) -> Classification {
    if !policy.exceeds(file.size) {
        Classification::Compliant
    } else if policy.is_allowed(&file.path, matcher) {
        Classification::Allowed
    } else {
        Classification::Oversized
    }
}

pub fn evaluate(
    files: &[TrackedFile],
    policy: &GatePolicy,
    matcher: &dyn PathMatcher,
) -> DomainReport {
    let mut violations: Vec<Violation> = Vec::new();
    let mut counts = GateCounts::default();

    // Listing order is preserved; no sorting.
    for file in files {
        counts.scanned += 1;
        match classify(file, policy, matcher) {
            Classification::Compliant => {}
            Classification::Allowed => counts.allowed += 1,
            Classification::Oversized => violations.push(Violation {
                path: file.path.clone(),
                size: file.size,
            }),
        }
    }
    counts.violations = violations.len() as u64;

    let findings = violations
        .iter()
        .map(|v| violation_finding(v, policy.threshold))
        .collect();

    let verdict = if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    DomainReport {
        verdict,
        violations,
        findings,
        counts,
    }
}

fn violation_finding(violation: &Violation, threshold: u64) -> Finding {
    let path = violation.path.as_str();
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_FILES_MAX_SIZE.to_string(),
        code: ids::CODE_FILE_TOO_LARGE.to_string(),
        message: violation.to_string(),
        location: Some(Location {
            path: violation.path.clone(),
        }),
        help: Some(format!(
            "Shrink the file below {threshold} bytes, move it out of the repository, or add a matching allow pattern."
        )),
        fingerprint: Some(fingerprint_for_path(
            ids::CHECK_FILES_MAX_SIZE,
            ids::CODE_FILE_TOO_LARGE,
            path,
        )),
        data: json!({
            "path": path,
            "size": violation.size,
            "threshold": threshold,
        }),
    }
}
