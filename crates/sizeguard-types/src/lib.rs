//! Stable DTOs and IDs used across the sizeguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted receipt
//! - stable string IDs and codes
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod receipt;

pub use path::RepoPath;
pub use receipt::{
    Finding, Location, ReportEnvelope, SCHEMA_REPORT_V1, Severity, SizeguardData,
    SizeguardReport, ToolMeta, Verdict,
};
