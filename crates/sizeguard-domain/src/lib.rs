//! Pure size policy evaluation (no IO).
//!
//! Input: measured tracked files and an immutable [`policy::GatePolicy`].
//! Output: violations + findings + verdict.

#![forbid(unsafe_code)]

pub mod matcher;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;

pub use engine::{classify, evaluate};
pub use fingerprint::fingerprint_for_path;
pub use matcher::{GlobMatcher, PathMatcher};
