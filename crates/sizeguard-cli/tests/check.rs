//! End-to-end tests for the `sizeguard` binary.
//!
//! Each test builds a throwaway git repository, stages files with the real `git` binary,
//! and runs the gate against it.

use assert_cmd::Command;
use camino::{Utf8Path, Utf8PathBuf};
use predicates::prelude::*;
use sizeguard_test_util::{normalize_nondeterministic, write_sized};
use tempfile::TempDir;

const HEADER: &str = "The following tracked files exceed the allowed size threshold of";

struct Repo {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Repo {
    fn new() -> Self {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        git(&root, &["init", "-q"]);
        Self { _tmp: tmp, root }
    }

    /// Write a file of `size` bytes and stage it.
    fn track(&self, rel: &str, size: usize) -> &Self {
        write_sized(&self.root, rel, size);
        git(&self.root, &["add", "--", rel]);
        self
    }

    fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
        self
    }

    fn cmd(&self) -> Command {
        let mut cmd = sizeguard_cmd();
        cmd.arg("--repo-root").arg(self.root.as_str());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

fn git(root: &Utf8Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(root)
        .args(args)
        .status()
        .expect("spawn git");
    assert!(status.success(), "git {args:?} failed");
}

#[allow(deprecated)]
fn sizeguard_cmd() -> Command {
    Command::cargo_bin("sizeguard").unwrap()
}

#[test]
fn oversized_file_fails_and_is_listed() {
    let repo = Repo::new();
    repo.track("big.bin", 500).track("small.txt", 10);

    repo.cmd()
        .arg("100")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(format!("{HEADER} 100 bytes:")))
        .stderr(predicate::str::contains("big.bin: 500 bytes"))
        .stderr(predicate::str::contains("small.txt").not());
}

#[test]
fn allow_option_exempts_file() {
    let repo = Repo::new();
    repo.track("big.bin", 500);

    repo.cmd()
        .args(["100", "--allow", "big.bin"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn default_threshold_passes_silently() {
    let repo = Repo::new();
    repo.track("a.txt", 400_000).track("docs/readme.md", 1_000);

    repo.cmd().assert().success().stdout("").stderr("");
}

#[test]
fn default_threshold_catches_larger_file() {
    let repo = Repo::new();
    repo.track("huge.dat", 400_001);

    repo.cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("{HEADER} 400000 bytes:")))
        .stderr(predicate::str::contains("huge.dat: 400001 bytes"));
}

#[test]
fn violations_are_listed_one_per_line() {
    let repo = Repo::new();
    repo.track("a.bin", 300).track("b/c.bin", 200).track("ok.txt", 5);

    let output = repo.cmd().arg("100").output().expect("run sizeguard");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    let mut lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.remove(0), format!("{HEADER} 100 bytes:"));
    lines.sort();
    assert_eq!(lines, vec!["a.bin: 300 bytes", "b/c.bin: 200 bytes"]);
}

#[test]
fn default_allowlist_file_is_honored() {
    let repo = Repo::new();
    repo.track("assets/logo.png", 500)
        .track("big.bin", 500)
        .write(
            "scripts/large_file_allowlist.txt",
            "# binary assets\n\nassets/*.png\n",
        );

    repo.cmd()
        .arg("100")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("big.bin: 500 bytes"))
        .stderr(predicate::str::contains("logo.png").not());
}

#[test]
fn explicit_allowlist_file_resolves_against_repo_root() {
    let repo = Repo::new();
    repo.track("big.bin", 500).write("ci/allow.txt", "big.bin\n");

    repo.cmd()
        .args(["100", "--allowlist-file", "ci/allow.txt"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn missing_explicit_allowlist_file_is_not_an_error() {
    let repo = Repo::new();
    repo.track("small.txt", 5);

    repo.cmd()
        .args(["100", "--allowlist-file", "does/not/exist.txt"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn star_does_not_cross_directories() {
    let repo = Repo::new();
    repo.track("data.bin", 500).track("sub/data.bin", 500);

    repo.cmd()
        .args(["100", "--allow", "*.bin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sub/data.bin: 500 bytes"))
        .stderr(predicate::str::contains("\ndata.bin").not());
}

#[test]
fn untracked_files_are_ignored() {
    let repo = Repo::new();
    repo.track("small.txt", 5);
    write_sized(&repo.root, "untracked.bin", 5_000);

    repo.cmd().arg("100").assert().success().stderr("");
}

#[test]
fn tracked_but_deleted_file_is_skipped() {
    let repo = Repo::new();
    repo.track("gone.bin", 500).track("small.txt", 5);
    std::fs::remove_file(repo.root.join("gone.bin")).expect("remove");

    repo.cmd().arg("100").assert().success().stdout("").stderr("");
}

#[test]
fn config_file_sets_threshold_and_cli_overrides_it() {
    let repo = Repo::new();
    repo.track("mid.bin", 300)
        .write("sizeguard.toml", "threshold = 200\n");

    repo.cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mid.bin: 300 bytes"));

    repo.cmd().arg("1000").assert().success().stderr("");
}

#[test]
fn invalid_config_is_a_runtime_error() {
    let repo = Repo::new();
    repo.track("small.txt", 5).write("sizeguard.toml", "threshold = \"big\"\n");

    repo.cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sizeguard error: parse config"));
}

#[test]
fn invalid_glob_is_a_runtime_error() {
    let repo = Repo::new();
    repo.track("small.txt", 5);

    repo.cmd()
        .args(["--allow", "["])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid allow glob: ["));
}

#[test]
fn outside_a_repository_fails_with_git_error() {
    let tmp = TempDir::new().expect("temp dir");
    let ceiling = tmp.path().parent().expect("temp dir has a parent");

    sizeguard_cmd()
        .arg("--repo-root")
        .arg(tmp.path())
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env_remove("RUST_LOG")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("sizeguard error: locate repository root"))
        .stderr(predicate::str::contains("git rev-parse"))
        .stderr(predicate::str::contains(HEADER).not());
}

#[test]
fn running_from_a_subdirectory_checks_the_whole_repository() {
    let repo = Repo::new();
    repo.track("big.bin", 500).track("sub/small.txt", 5);

    sizeguard_cmd()
        .current_dir(repo.root.join("sub"))
        .env_remove("RUST_LOG")
        .arg("100")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("big.bin: 500 bytes"));
}

#[test]
fn subdirectory_run_uses_root_allowlist_and_config() {
    let repo = Repo::new();
    repo.track("assets/logo.png", 500)
        .track("sub/small.txt", 5)
        .write("scripts/large_file_allowlist.txt", "assets/*.png\n")
        .write("sizeguard.toml", "threshold = 100\n");

    sizeguard_cmd()
        .current_dir(repo.root.join("sub"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr("");

    sizeguard_cmd()
        .arg("--repo-root")
        .arg(repo.root.join("sub").as_str())
        .args(["--allowlist-file", "none.txt"])
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("assets/logo.png: 500 bytes"));
}

#[cfg(unix)]
#[test]
fn backslash_file_name_is_still_checked() {
    let repo = Repo::new();
    write_sized(&repo.root, "a\\b.bin", 500);
    git(&repo.root, &["add", "."]);

    repo.cmd()
        .arg("100")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a\\b.bin: 500 bytes"));
}

#[test]
fn report_out_writes_receipt() {
    let repo = Repo::new();
    repo.track("big.bin", 500).track("small.txt", 5);
    let out_dir = TempDir::new().expect("temp dir");
    let report_path = out_dir.path().join("artifacts/report.json");

    repo.cmd()
        .arg("100")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1);

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report = normalize_nondeterministic(serde_json::from_str(&text).expect("json"));
    assert_eq!(report["schema"], "sizeguard.report.v1");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["started_at"], "__TIMESTAMP__");
    assert_eq!(report["data"]["threshold"], 100);
    assert_eq!(report["data"]["files_listed"], 2);
    assert_eq!(report["data"]["violations"], 1);
    assert_eq!(report["findings"][0]["location"]["path"], "big.bin");
    assert_eq!(report["findings"][0]["code"], "file_too_large");
}

#[test]
fn report_out_is_written_on_pass() {
    let repo = Repo::new();
    repo.track("small.txt", 5);
    let out_dir = TempDir::new().expect("temp dir");
    let report_path = out_dir.path().join("report.json");

    repo.cmd()
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success()
        .stderr("");

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["findings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn github_annotations_go_to_stdout() {
    let repo = Repo::new();
    repo.track("big.bin", 500);

    repo.cmd()
        .args(["100", "--github-annotations"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("::error file=big.bin::"))
        .stderr(predicate::str::contains("big.bin: 500 bytes"));
}

#[test]
fn repeated_runs_are_identical() {
    let repo = Repo::new();
    repo.track("x.bin", 700).track("y.bin", 800);

    let first = repo.cmd().arg("100").output().expect("first run");
    let second = repo.cmd().arg("100").output().expect("second run");
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}
