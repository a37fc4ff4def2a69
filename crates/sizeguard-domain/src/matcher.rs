//! Allow-pattern matching.
//!
//! Matching is a capability so evaluation can be exercised with any glob semantics.
//! The production matcher uses `globset` against the repo-relative path, with `*`
//! confined to a single path segment and `**` crossing segments.

use globset::{GlobBuilder, GlobMatcher as CompiledGlob, GlobSet, GlobSetBuilder};
use sizeguard_types::RepoPath;

/// Decides whether an allow pattern matches a tracked path.
pub trait PathMatcher {
    fn is_match(&self, pattern: &str, path: &RepoPath) -> bool;

    /// Whether any of `patterns` matches `path`.
    fn is_match_any(&self, patterns: &[String], path: &RepoPath) -> bool {
        patterns.iter().any(|pattern| self.is_match(pattern, path))
    }
}

fn build_glob(pattern: &str) -> Result<globset::Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Compile an allow pattern with the semantics used by [`GlobMatcher`].
pub fn compile_glob(pattern: &str) -> Result<CompiledGlob, globset::Error> {
    build_glob(pattern).map(|glob| glob.compile_matcher())
}

/// Path-glob matcher backed by a `globset::GlobSet` compiled once for a policy's patterns.
///
/// Patterns it was not built with are compiled on demand; an invalid one never matches.
#[derive(Clone, Debug)]
pub struct GlobMatcher {
    patterns: Vec<String>,
    set: GlobSet,
}

impl GlobMatcher {
    pub fn new(patterns: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(build_glob(pattern)?);
        }
        Ok(Self {
            patterns: patterns.to_vec(),
            set: builder.build()?,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for GlobMatcher {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }
}

impl PathMatcher for GlobMatcher {
    fn is_match(&self, pattern: &str, path: &RepoPath) -> bool {
        match self.patterns.iter().position(|p| p == pattern) {
            Some(index) => self.set.matches(path.as_str()).contains(&index),
            None => compile_glob(pattern)
                .map(|glob| glob.is_match(path.as_str()))
                .unwrap_or(false),
        }
    }

    fn is_match_any(&self, patterns: &[String], path: &RepoPath) -> bool {
        if patterns == self.patterns.as_slice() {
            return self.set.is_match(path.as_str());
        }
        patterns.iter().any(|pattern| self.is_match(pattern, path))
    }
}
