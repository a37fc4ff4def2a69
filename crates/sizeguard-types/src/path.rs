use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical repo-relative path used for matching and in reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        // Avoid empty path; keep it explicit.
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    /// Wrap a path git already reports repo-relative with `/` separators.
    ///
    /// Unlike [`RepoPath::new`] no rewriting happens: on POSIX a `\` is part of the file name.
    pub fn verbatim<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    /// Resolve this path against a repository root on disk.
    pub fn resolve(&self, repo_root: &Utf8Path) -> Utf8PathBuf {
        repo_root.join(self.as_str())
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_dot_prefix() {
        assert_eq!(RepoPath::new("./assets\\logo.png").as_str(), "assets/logo.png");
        assert_eq!(RepoPath::new("././big.bin").as_str(), "big.bin");
    }

    #[test]
    fn verbatim_keeps_backslashes() {
        assert_eq!(RepoPath::verbatim("a\\b.bin").as_str(), "a\\b.bin");
        assert_ne!(RepoPath::verbatim("a\\b.bin"), RepoPath::new("a\\b.bin"));
    }

    #[test]
    fn empty_becomes_dot() {
        assert_eq!(RepoPath::new("").as_str(), ".");
    }

    #[test]
    fn resolve_joins_onto_root() {
        let root = Utf8Path::new("/repo");
        assert_eq!(
            RepoPath::new("sub/data.bin").resolve(root),
            Utf8PathBuf::from("/repo/sub/data.bin")
        );
    }
}
