use crate::matcher::{GlobMatcher, PathMatcher};
use sizeguard_types::RepoPath;

/// Built-in threshold, in bytes.
pub const DEFAULT_THRESHOLD: u64 = 400_000;

/// Immutable parameter bundle for one evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatePolicy {
    /// Maximum allowed size in bytes. Files strictly larger than this are oversized.
    pub threshold: u64,
    /// Glob patterns exempting matching paths from the threshold.
    pub allow: Vec<String>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            allow: Vec::new(),
        }
    }
}

impl GatePolicy {
    pub fn new(threshold: u64, allow: Vec<String>) -> Self {
        Self { threshold, allow }
    }

    pub fn exceeds(&self, size: u64) -> bool {
        size > self.threshold
    }

    pub fn is_allowed(&self, path: &RepoPath, matcher: &dyn PathMatcher) -> bool {
        matcher.is_match_any(&self.allow, path)
    }

    /// Compile this policy's allow patterns into a single glob set.
    pub fn glob_matcher(&self) -> Result<GlobMatcher, globset::Error> {
        GlobMatcher::new(&self.allow)
    }
}
