use anyhow::Context;
use camino::Utf8Path;
use crate::lister::ListedPath;
use sizeguard_domain::model::TrackedFile;
use sizeguard_types::RepoPath;
use std::io::ErrorKind;
use tracing::{debug, trace};

/// Sizes observed for the listed paths.
#[derive(Clone, Debug, Default)]
pub struct Measurement {
    /// Measured files, in listing order.
    pub files: Vec<TrackedFile>,
    /// Listed paths that were gone by the time they were measured.
    pub missing: Vec<RepoPath>,
}

/// Stat every listed path under `repo_root`.
///
/// Files are opened by their exact listed bytes; the display path is only used for reporting.
///
/// A path that no longer exists is recorded in [`Measurement::missing`] and otherwise ignored.
/// Directories (submodule entries) are skipped. Any other stat failure is an error.
pub fn measure_tracked_files(
    repo_root: &Utf8Path,
    paths: Vec<ListedPath>,
) -> anyhow::Result<Measurement> {
    let mut out = Measurement::default();

    for ListedPath { path, raw } in paths {
        let abs = repo_root.as_std_path().join(&raw);
        match std::fs::metadata(&abs) {
            Ok(meta) if meta.is_dir() => {
                trace!(path = %path, "skipping directory entry");
            }
            Ok(meta) => out.files.push(TrackedFile {
                path,
                size: meta.len(),
            }),
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!(path = %path, "tracked file missing on disk; skipping");
                out.missing.push(path);
            }
            Err(err) => return Err(err).with_context(|| format!("stat {}", abs.display())),
        }
    }

    Ok(out)
}
