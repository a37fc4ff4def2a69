//! Repository adapters: list tracked files, measure them, load the allowlist file.
//!
//! This crate does filesystem IO and owns the single external process call (`git ls-files`).
//! Everything it hands back is already repo-relative.

#![forbid(unsafe_code)]

mod allowlist;
mod lister;
mod measure;

pub use allowlist::{load_allowlist_file, resolve_repo_path};
pub use lister::{
    GitLsFiles, ListError, ListedPath, TrackedFileLister, discover_repo_root, parse_ls_files_output,
};
pub use measure::{Measurement, measure_tracked_files};
