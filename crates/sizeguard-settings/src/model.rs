use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `sizeguard.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SizeguardConfigV1 {
    /// Optional schema string for tooling (`sizeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Maximum allowed size of a tracked file, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u64>,

    /// Glob patterns exempt from the threshold.
    #[serde(default)]
    pub allow: Vec<String>,

    /// Newline-delimited allowlist file, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowlist_file: Option<String>,
}
