//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the threshold boundary
//! - allowlist exemption
//! - ordering and determinism of the report

use crate::engine::evaluate;
use crate::report::DomainReport;
use crate::model::TrackedFile;
use crate::policy::GatePolicy;
use proptest::prelude::*;
use sizeguard_types::Verdict;

// ============================================================================
// Strategies
// ============================================================================

/// Strategy for repo-relative paths with one to four segments.
fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,11}(/[a-z][a-z0-9_-]{0,11}){0,3}\\.(bin|png|txt)")
        .unwrap()
}

fn arb_files() -> impl Strategy<Value = Vec<TrackedFile>> {
    prop::collection::vec((arb_path(), 0u64..2_000), 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(path, size)| TrackedFile::new(path.as_str(), size))
            .collect()
    })
}

fn check(files: &[TrackedFile], policy: &GatePolicy) -> DomainReport {
    let matcher = policy.glob_matcher().expect("valid globs");
    evaluate(files, policy, &matcher)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn files_at_or_below_threshold_are_never_reported(
        files in arb_files(),
        threshold in 0u64..2_000,
    ) {
        let report = check(&files, &GatePolicy::new(threshold, Vec::new()));
        for v in &report.violations {
            prop_assert!(v.size > threshold);
        }
    }

    #[test]
    fn without_allowlist_every_oversized_file_is_reported_in_order(
        files in arb_files(),
        threshold in 0u64..2_000,
    ) {
        let report = check(&files, &GatePolicy::new(threshold, Vec::new()));
        let expected: Vec<&str> = files
            .iter()
            .filter(|f| f.size > threshold)
            .map(|f| f.path.as_str())
            .collect();
        let actual: Vec<&str> = report.violations.iter().map(|v| v.path.as_str()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(report.verdict == Verdict::Pass, report.violations.is_empty());
    }

    #[test]
    fn universal_allow_pattern_exempts_everything(
        files in arb_files(),
        threshold in 0u64..2_000,
    ) {
        let policy = GatePolicy::new(threshold, vec!["**".to_string()]);
        let report = check(&files, &policy);
        prop_assert!(report.violations.is_empty());
        prop_assert_eq!(
            report.counts.allowed as usize,
            files.iter().filter(|f| f.size > threshold).count()
        );
    }

    #[test]
    fn exact_path_allow_exempts_only_that_path(
        files in arb_files(),
        threshold in 0u64..2_000,
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!files.is_empty());
        let chosen = files[pick.index(files.len())].path.clone();
        let policy = GatePolicy::new(threshold, vec![chosen.as_str().to_string()]);
        let report = check(&files, &policy);

        prop_assert!(report.violations.iter().all(|v| v.path != chosen));
        let others = files
            .iter()
            .filter(|f| f.size > threshold && f.path != chosen)
            .count();
        prop_assert_eq!(report.violations.len(), others);
    }

    #[test]
    fn evaluation_is_deterministic(files in arb_files(), threshold in 0u64..2_000) {
        let policy = GatePolicy::new(threshold, vec!["*.png".to_string()]);
        let a = check(&files, &policy);
        let b = check(&files, &policy);
        prop_assert_eq!(a.violations, b.violations);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }
}
