//! Shared test utilities for the sizeguard workspace.
//!
//! The app and CLI test suites both need in-memory listers and receipt normalization,
//! so they live here instead of behind `#[cfg(test)]` in one crate.

use camino::Utf8Path;
use serde_json::Value;
use sizeguard_repo::{ListError, ListedPath, TrackedFileLister};

/// Lister that returns a fixed set of paths, in the given order.
#[derive(Clone, Debug, Default)]
pub struct StaticLister {
    paths: Vec<ListedPath>,
}

impl StaticLister {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(|p| ListedPath::from(p.as_ref()))
                .collect(),
        }
    }
}

impl TrackedFileLister for StaticLister {
    fn list_tracked_files(&self) -> Result<Vec<ListedPath>, ListError> {
        Ok(self.paths.clone())
    }
}

/// Lister that fails the way `git ls-files` does outside a repository.
#[derive(Clone, Debug)]
pub struct FailingLister {
    code: i32,
    stderr: String,
}

impl FailingLister {
    pub fn new(code: i32, stderr: &str) -> Self {
        Self {
            code,
            stderr: stderr.to_string(),
        }
    }
}

impl TrackedFileLister for FailingLister {
    fn list_tracked_files(&self) -> Result<Vec<ListedPath>, ListError> {
        Err(ListError::Failed {
            command: "ls-files",
            code: Some(self.code),
            stderr: self.stderr.clone(),
        })
    }
}

/// Write a file of exactly `size` bytes at `root/rel`, creating parent directories.
pub fn write_sized(root: &Utf8Path, rel: &str, size: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, vec![b'x'; size]).expect("write file");
}

/// Normalize non-deterministic receipt fields for comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` at the root of an envelope. Timestamp
/// keys (`started_at`, `finished_at`) are replaced with `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
