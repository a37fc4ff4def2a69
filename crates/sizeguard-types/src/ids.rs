//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FILES_MAX_SIZE: &str = "files.max_size";

// Codes: files.max_size
pub const CODE_FILE_TOO_LARGE: &str = "file_too_large";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Tool name used in receipts and annotations.
pub const TOOL_NAME: &str = "sizeguard";
