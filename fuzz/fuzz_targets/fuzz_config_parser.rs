//! Fuzz target for `sizeguard.toml` and allowlist file parsing.
//!
//! Goal: config parsing and policy resolution should **never panic**.
//! Rejected configs and invalid globs are expected errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sizeguard_settings::{Overrides, parse_allowlist, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let patterns = parse_allowlist(text);
    for pattern in &patterns {
        assert_eq!(pattern.trim(), pattern);
        assert!(!pattern.is_empty());
        assert!(!pattern.starts_with('#'));
    }

    if let Ok(cfg) = parse_config_toml(text) {
        let resolved = resolve_config(cfg, Overrides::default());
        let _ = resolved.into_policy(patterns);
    }
});
