use camino::{Utf8Path, Utf8PathBuf};
use sizeguard_types::RepoPath;
use std::path::PathBuf;
use std::process::{Command, Output};
use thiserror::Error;
use tracing::debug;

/// One entry of the tracked-file listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedPath {
    /// Repo-relative path used for matching and reporting.
    pub path: RepoPath,
    /// The path exactly as git listed it, relative to the repository root. Used to stat.
    pub raw: PathBuf,
}

impl ListedPath {
    /// Build an entry from the raw bytes of one `git ls-files -z` record.
    ///
    /// The display path is decoded lossily; `raw` keeps the original bytes on Unix.
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self {
            path: RepoPath::verbatim(String::from_utf8_lossy(raw)),
            raw: os_path(raw),
        }
    }
}

impl From<&str> for ListedPath {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

#[cfg(unix)]
fn os_path(raw: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(raw))
}

#[cfg(not(unix))]
fn os_path(raw: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(raw).into_owned())
}

/// Source of the authoritative tracked-file list.
pub trait TrackedFileLister {
    /// Tracked paths relative to the repository root, in listing order.
    fn list_tracked_files(&self) -> Result<Vec<ListedPath>, ListError>;
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("failed to run `git {command}` in {dir}")]
    Spawn {
        command: &'static str,
        dir: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {command}` failed ({}): {stderr}", exit_label(.code))]
    Failed {
        command: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    #[error("repository root is not valid UTF-8: {0}")]
    NonUtf8Root(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn run_git(dir: &Utf8Path, command: &'static str, args: &[&str]) -> Result<Output, ListError> {
    let output = Command::new("git")
        .current_dir(dir)
        .arg(command)
        .args(args)
        .output()
        .map_err(|source| ListError::Spawn {
            command,
            dir: dir.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ListError::Failed {
            command,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

/// Find the top level of the work tree containing `start`.
///
/// `git ls-files` only lists the subtree below its working directory, so the gate always runs
/// from the top level regardless of where it was invoked.
pub fn discover_repo_root(start: &Utf8Path) -> Result<Utf8PathBuf, ListError> {
    let output = run_git(start, "rev-parse", &["--show-toplevel"])?;
    let text = String::from_utf8(output.stdout)
        .map_err(|err| ListError::NonUtf8Root(String::from_utf8_lossy(err.as_bytes()).into_owned()))?;
    let root = Utf8PathBuf::from(text.trim_end_matches(['\n', '\r']));
    debug!(start = %start, root = %root, "resolved repository root");
    Ok(root)
}

/// Lists tracked files with `git ls-files -z` run inside `repo_root`.
#[derive(Clone, Debug)]
pub struct GitLsFiles {
    repo_root: Utf8PathBuf,
}

impl GitLsFiles {
    pub fn new(repo_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Utf8Path {
        &self.repo_root
    }
}

impl TrackedFileLister for GitLsFiles {
    fn list_tracked_files(&self) -> Result<Vec<ListedPath>, ListError> {
        let output = run_git(&self.repo_root, "ls-files", &["-z"])?;
        let paths = parse_ls_files_output(&output.stdout);
        debug!(count = paths.len(), root = %self.repo_root, "listed tracked files");
        Ok(paths)
    }
}

/// Split NUL-delimited `git ls-files -z` output into listed paths.
pub fn parse_ls_files_output(stdout: &[u8]) -> Vec<ListedPath> {
    stdout
        .split(|b| *b == 0)
        .filter(|raw| !raw.is_empty())
        .map(ListedPath::from_bytes)
        .collect()
}
