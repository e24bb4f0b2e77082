//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "trylint",
    version,
    about = "Try stricter ESLint rules on your codebase.",
    long_about = "trylint — run a candidate set of ESLint rules against a codebase without touching its permanent configuration, and report the per-rule impact on the console and as a standalone HTML file.",
    after_help = "Examples:\n  trylint --rules candidate-rules.jsonc\n  trylint src tests --rules rules.json --sort severity\n  trylint --rules rules.jsonc --config eslint.config.js"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(default_value = ".", help = "Files/directories/globs to lint")]
    pub patterns: Vec<String>,
    #[arg(long, help = "Path to a JSON/JSONC file with the rules to trial")]
    pub rules: String,
    #[arg(long, help = "Path to your project's ESLint configuration file")]
    pub config: Option<String>,
    #[arg(
        long,
        default_value = "rule",
        help = "Sort results by \"rule\" or \"severity\" (errors + warnings)"
    )]
    pub sort: String,
}
