use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;
use tracing::debug;

/// Resolve a configured path against the repository root; absolute paths are kept as-is.
pub fn resolve_repo_path(repo_root: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

/// Load patterns from an allowlist file.
///
/// A missing file contributes no patterns. Other read failures are errors.
pub fn load_allowlist_file(path: &Utf8Path) -> anyhow::Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let patterns = sizeguard_settings::parse_allowlist(&text);
            debug!(file = %path, count = patterns.len(), "loaded allowlist");
            Ok(patterns)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(file = %path, "allowlist file not found; no patterns");
            Ok(Vec::new())
        }
        Err(err) => Err(err).with_context(|| format!("read allowlist file {path}")),
    }
}
