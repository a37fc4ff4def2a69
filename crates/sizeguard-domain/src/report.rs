use sizeguard_types::{Finding, RepoPath, Verdict};
use std::fmt;

/// A tracked file that exceeds the threshold and matches no allow pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub path: RepoPath,
    pub size: u64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} bytes", self.path, self.size)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateCounts {
    pub scanned: u64,
    pub allowed: u64,
    pub violations: u64,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Violations in the order the files were given.
    pub violations: Vec<Violation>,
    pub findings: Vec<Finding>,
    pub counts: GateCounts,
}
