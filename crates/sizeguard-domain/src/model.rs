use sizeguard_types::RepoPath;

/// A tracked path paired with the size observed on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedFile {
    pub path: RepoPath,
    pub size: u64,
}

impl TrackedFile {
    pub fn new(path: impl Into<RepoPath>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Outcome of checking one file against the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// At or below the threshold.
    Compliant,
    /// Above the threshold, but exempted by an allow pattern.
    Allowed,
    /// Above the threshold with no matching allow pattern.
    Oversized,
}
