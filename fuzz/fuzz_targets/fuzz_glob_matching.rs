//! Fuzz target for allowlist glob matching.
//!
//! Goal: matching arbitrary patterns against arbitrary paths should **never panic**,
//! and a file at or under the threshold is never reported.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_glob_matching
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sizeguard_domain::model::TrackedFile;
use sizeguard_domain::policy::GatePolicy;
use sizeguard_domain::{GlobMatcher, PathMatcher, evaluate};

#[derive(Arbitrary, Debug)]
struct MatchInput {
    threshold: u64,
    patterns: Vec<String>,
    files: Vec<(String, u64)>,
}

fuzz_target!(|input: MatchInput| {
    if input.patterns.len() > 16 || input.files.len() > 64 {
        return;
    }
    if input.patterns.iter().any(|p| p.len() > 256) {
        return;
    }

    let files: Vec<TrackedFile> = input
        .files
        .into_iter()
        .filter(|(path, _)| path.len() <= 512)
        .map(|(path, size)| TrackedFile::new(path.as_str(), size))
        .collect();

    let on_demand = GlobMatcher::default();
    for pattern in &input.patterns {
        for file in &files {
            let _ = on_demand.is_match(pattern, &file.path);
        }
    }

    let policy = GatePolicy::new(input.threshold, input.patterns);
    let Ok(matcher) = policy.glob_matcher() else {
        return;
    };
    let report = evaluate(&files, &policy, &matcher);
    for violation in &report.violations {
        assert!(violation.size > input.threshold);
        assert!(!policy.is_allowed(&violation.path, &matcher));
        assert!(!policy.is_allowed(&violation.path, &on_demand));
    }
});
