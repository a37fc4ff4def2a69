//! Use case orchestration for sizeguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, repo,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::{render_annotations, render_violation_message, write_report};
pub use report::{runtime_error_report, serialize_report, to_renderable};
