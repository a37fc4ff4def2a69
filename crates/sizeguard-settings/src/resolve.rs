use crate::DEFAULT_ALLOWLIST_FILE;
use crate::model::SizeguardConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use sizeguard_domain::matcher::compile_glob;
use sizeguard_domain::policy::{DEFAULT_THRESHOLD, GatePolicy};

/// Values supplied on the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub threshold: Option<u64>,
    pub allow: Vec<String>,
    pub allowlist_file: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub threshold: u64,
    /// Direct patterns: CLI first, then config file.
    pub allow: Vec<String>,
    /// Allowlist file path as configured; relative paths are resolved by the caller.
    pub allowlist_file: Utf8PathBuf,
    /// Whether the allowlist file was named explicitly (CLI or config) rather than defaulted.
    pub allowlist_explicit: bool,
}

pub fn resolve_config(cfg: SizeguardConfigV1, overrides: Overrides) -> ResolvedConfig {
    let threshold = overrides
        .threshold
        .or(cfg.threshold)
        .unwrap_or(DEFAULT_THRESHOLD);

    let mut allow = overrides.allow;
    allow.extend(cfg.allow);

    let explicit = overrides
        .allowlist_file
        .or_else(|| cfg.allowlist_file.map(Utf8PathBuf::from));
    let allowlist_explicit = explicit.is_some();
    let allowlist_file = explicit.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ALLOWLIST_FILE));

    ResolvedConfig {
        threshold,
        allow,
        allowlist_file,
        allowlist_explicit,
    }
}

impl ResolvedConfig {
    /// Build the evaluation policy: direct patterns followed by allowlist file patterns.
    ///
    /// Every pattern must compile as a glob.
    pub fn into_policy(self, allowlist_patterns: Vec<String>) -> anyhow::Result<GatePolicy> {
        validate_globs(&self.allow).context("invalid allow pattern")?;
        validate_globs(&allowlist_patterns)
            .with_context(|| format!("invalid pattern in allowlist file {}", self.allowlist_file))?;

        let mut allow = self.allow;
        allow.extend(allowlist_patterns);
        Ok(GatePolicy::new(self.threshold, allow))
    }
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        compile_glob(pattern).with_context(|| format!("invalid allow glob: {pattern}"))?;
    }
    Ok(())
}
