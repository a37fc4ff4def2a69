//! CLI entry point for sizeguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging, I/O, and exit codes.
//! All business logic lives in the `sizeguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser};
use sizeguard_app::{
    CheckInput, render_annotations, render_violation_message, run_check, runtime_error_report,
    verdict_exit_code, write_report,
};
use sizeguard_repo::{GitLsFiles, discover_repo_root, resolve_repo_path};
use sizeguard_settings::{DEFAULT_CONFIG_FILE, Overrides};
use std::io::ErrorKind;
use tracing::debug;

/// Exit code for environment and configuration failures.
const EXIT_RUNTIME_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "sizeguard",
    version,
    about = "Fail when tracked files exceed a byte-size threshold"
)]
struct Cli {
    /// Maximum allowed file size in bytes (default: 400000).
    threshold: Option<u64>,

    /// Glob pattern to allow even when above the threshold. May be repeated.
    #[arg(long = "allow", value_name = "PATTERN")]
    allow: Vec<String>,

    /// Newline-delimited allowlist of glob patterns.
    /// Defaults to scripts/large_file_allowlist.txt when present.
    #[arg(long, value_name = "PATH")]
    allowlist_file: Option<Utf8PathBuf>,

    /// Any directory inside the repository. The check always runs from the work tree's top
    /// level, so every tracked file is covered.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to sizeguard config TOML, relative to the repository root.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Where to write a JSON receipt of the run.
    #[arg(long, value_name = "PATH")]
    report_out: Option<Utf8PathBuf>,

    /// Also print GitHub Actions annotations for violations on stdout.
    #[arg(long)]
    github_annotations: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cmd_check(&cli) {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if let Some(path) = &cli.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report(path, &report);
            }
            eprintln!("sizeguard error: {err:#}");
            std::process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn cmd_check(cli: &Cli) -> anyhow::Result<i32> {
    let repo_root = discover_repo_root(&cli.repo_root).context("locate repository root")?;
    let repo_root = repo_root.as_path();

    // Missing config file is allowed (defaults apply).
    let cfg_path = resolve_repo_path(repo_root, &cli.config);
    let cfg_text = read_optional(&cfg_path).context("read config")?;

    let overrides = Overrides {
        threshold: cli.threshold,
        allow: cli.allow.clone(),
        allowlist_file: cli.allowlist_file.clone(),
    };
    let lister = GitLsFiles::new(repo_root);

    let output = run_check(CheckInput {
        repo_root,
        config_text: &cfg_text,
        overrides: &overrides,
        lister: &lister,
    })?;

    if let Some(path) = &cli.report_out {
        write_report(path, &output.report).context("write report json")?;
    }

    if let Some(message) = render_violation_message(&output) {
        eprintln!("{message}");
        if cli.github_annotations {
            for annotation in render_annotations(&output) {
                println!("{annotation}");
            }
        }
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn read_optional(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read {path}")),
    }
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
