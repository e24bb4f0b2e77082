//! trylint CLI binary entry point.
//! Validates options, runs the trial lint, and writes both reports.

mod aggregate;
mod cli;
mod lint;
mod models;
mod output;
mod report;
mod rules;
mod utils;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use output::SortOption;
use std::fs;
use std::time::Instant;
// Colorization centralized in utils; no direct owo_colors usage here

fn main() {
    if let Err(err) = run() {
        eprintln!("\n{} {}", utils::error_prefix(), err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    // Reject a bad sort mode before any lint work begins.
    let sort: SortOption = cli.sort.parse()?;

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let rules = rules::parse_rules_file(&cwd.join(&cli.rules))?;

    println!(
        "{} Starting trylint for {} rules...\n",
        utils::info_prefix(),
        rules.len()
    );

    let config_file = cli.config.as_ref().map(|c| cwd.join(c));
    let results = lint::run_lint(&cwd, &rules, &cli.patterns, config_file.as_deref())?;

    output::print_console_report(&results, sort);

    let html = report::generate_html(&results);
    let out_path = cwd.join(report::REPORT_FILE_NAME);
    fs::write(&out_path, html)
        .with_context(|| format!("failed to write report '{}'", out_path.display()))?;

    println!(
        "{} Report generated in {:.2}s: file://{}",
        utils::ok_prefix(),
        start.elapsed().as_secs_f64(),
        out_path.display()
    );
    Ok(())
}
