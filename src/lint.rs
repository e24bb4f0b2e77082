//! Lint execution adapter.
//!
//! Expands the requested patterns into a concrete file list, drives the
//! lint engine over it in fixed-size chunks while ticking a progress bar,
//! and folds the collected findings through the aggregator. The engine
//! sits behind a trait so tests can substitute a stub for the external
//! eslint process.

use crate::aggregate::aggregate;
use crate::models::{FileReport, RuleResult, RuleSet};
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value as Json;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

/// Extensions linted when a pattern names a directory.
const LINT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Directory names never descended into.
const IGNORED_DIRS: &[&str] = &["node_modules", "dist", "coverage"];

/// Files handed to the engine per invocation.
const CHUNK_SIZE: usize = 10;

/// The external lint engine: lint a batch of files, return one report per
/// file, or fail the whole run.
pub trait LintEngine {
    fn lint_files(&self, files: &[PathBuf]) -> Result<Vec<FileReport>>;
}

/// Run the trial lint with the eslint executable as the engine.
pub fn run_lint(
    cwd: &Path,
    rules: &RuleSet,
    patterns: &[String],
    config_file: Option<&Path>,
) -> Result<Vec<RuleResult>> {
    let engine = EslintCli::new(cwd, rules, config_file);
    run_lint_with(cwd, rules, patterns, &engine)
}

/// Run the trial lint with a caller-supplied engine.
pub fn run_lint_with(
    cwd: &Path,
    rules: &RuleSet,
    patterns: &[String],
    engine: &dyn LintEngine,
) -> Result<Vec<RuleResult>> {
    println!("Searching for files...");
    let files = resolve_targets(cwd, patterns)?;
    if files.is_empty() {
        println!("No files found to lint.");
        return Ok(Vec::new());
    }

    let bar = progress_bar(files.len() as u64);
    let mut reports: Vec<FileReport> = Vec::with_capacity(files.len());
    for chunk in files.chunks(CHUNK_SIZE) {
        reports.extend(engine.lint_files(chunk)?);
        bar.inc(chunk.len() as u64);
    }
    bar.finish_and_clear();

    Ok(aggregate(cwd, rules, &reports))
}

/// Expand `patterns` against `cwd` into a sorted, de-duplicated file list.
fn resolve_targets(cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    for pattern in patterns {
        for expanded in expand_pattern(cwd, pattern) {
            let abs = cwd.join(&expanded);
            let glob_str = abs.to_string_lossy().to_string();
            let entries = glob::glob(&glob_str)
                .with_context(|| format!("invalid glob pattern '{pattern}'"))?;
            for path in entries.flatten() {
                if path.is_file() && !is_ignored(&path) {
                    files.insert(path);
                }
            }
        }
    }
    Ok(files.into_iter().collect())
}

/// Mirror the engine CLI's pattern handling: `.` and bare directories
/// expand to the lintable extensions beneath them; explicit globs and
/// file paths pass through unchanged.
fn expand_pattern(cwd: &Path, pattern: &str) -> Vec<String> {
    if pattern == "." {
        return LINT_EXTENSIONS
            .iter()
            .map(|ext| format!("**/*.{ext}"))
            .collect();
    }
    let has_meta = pattern.contains(['*', '?', '[', '{']);
    if !has_meta && cwd.join(pattern).is_dir() {
        let base = pattern.trim_end_matches('/');
        return LINT_EXTENSIONS
            .iter()
            .map(|ext| format!("{base}/**/*.{ext}"))
            .collect();
    }
    vec![pattern.to_string()]
}

fn is_ignored(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => IGNORED_DIRS.iter().any(|d| name == OsStr::new(d)),
        _ => false,
    })
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template(
            "Linting | {bar:40} | {percent}% | {pos}/{len} Files | ETA: {eta}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Engine backed by the `eslint` executable and its JSON formatter.
///
/// Candidate rules are passed as one `--rule` flag each; the user's config
/// file is forwarded when given, otherwise config lookup is disabled so
/// only the candidate set is active.
pub struct EslintCli {
    cwd: PathBuf,
    rule_args: Vec<String>,
    config_file: Option<PathBuf>,
}

impl EslintCli {
    pub fn new(cwd: &Path, rules: &RuleSet, config_file: Option<&Path>) -> Self {
        let rule_args = rules
            .iter()
            .map(|(id, value)| {
                let mut single = RuleSet::new();
                single.insert(id.clone(), value.clone());
                Json::Object(single).to_string()
            })
            .collect();
        Self {
            cwd: cwd.to_path_buf(),
            rule_args,
            config_file: config_file.map(Path::to_path_buf),
        }
    }
}

impl LintEngine for EslintCli {
    fn lint_files(&self, files: &[PathBuf]) -> Result<Vec<FileReport>> {
        let mut cmd = Command::new("eslint");
        cmd.current_dir(&self.cwd)
            .arg("--format")
            .arg("json")
            .arg("--no-error-on-unmatched-pattern");
        match &self.config_file {
            Some(config) => {
                cmd.arg("--config").arg(config);
            }
            None => {
                cmd.arg("--no-config-lookup");
            }
        }
        for rule in &self.rule_args {
            cmd.arg("--rule").arg(rule);
        }
        cmd.args(files);

        let out = cmd
            .output()
            .context("failed to launch 'eslint'; is it installed and on PATH?")?;
        // Exit code 1 just means findings were reported.
        if !matches!(out.status.code(), Some(0) | Some(1)) {
            bail!(
                "eslint failed ({}): {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        serde_json::from_slice(&out.stdout).context("failed to parse eslint JSON output")
    }
}
