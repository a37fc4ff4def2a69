//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod allowlist;
mod model;
mod resolve;

pub use allowlist::parse_allowlist;
pub use model::SizeguardConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Allowlist location used when neither the CLI nor the config names one.
pub const DEFAULT_ALLOWLIST_FILE: &str = "scripts/large_file_allowlist.txt";

/// Config file looked up at the repository root by default.
pub const DEFAULT_CONFIG_FILE: &str = "sizeguard.toml";

/// Parse `sizeguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SizeguardConfigV1> {
    let cfg: SizeguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (defaults + config file + CLI overrides).
pub fn resolve_config(cfg: SizeguardConfigV1, overrides: Overrides) -> ResolvedConfig {
    resolve::resolve_config(cfg, overrides)
}
