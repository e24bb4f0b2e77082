//! Console rendering of aggregated rule results.
//!
//! Output order is a display concern: the caller picks a `SortOption` and
//! the renderer sorts a copy, never the caller's slice. Detail lines are
//! always ordered by file path regardless of the top-level mode.

use crate::models::{MessageDetail, RuleResult};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Top-level ordering of the console report.
pub enum SortOption {
    Rule,
    Severity,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid sort option '{0}': use \"rule\" or \"severity\"")]
pub struct InvalidSortOption(pub String);

impl FromStr for SortOption {
    type Err = InvalidSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule" => Ok(SortOption::Rule),
            "severity" => Ok(SortOption::Severity),
            other => Err(InvalidSortOption(other.to_string())),
        }
    }
}

/// Ascending by rule id.
pub fn sort_by_rule_id(a: &RuleResult, b: &RuleResult) -> Ordering {
    a.rule_id.cmp(&b.rule_id)
}

/// Descending by `errors + warnings`; ties fall back to ascending rule id.
pub fn sort_by_severity(a: &RuleResult, b: &RuleResult) -> Ordering {
    let total_a = a.errors + a.warnings;
    let total_b = b.errors + b.warnings;
    total_b.cmp(&total_a).then_with(|| sort_by_rule_id(a, b))
}

/// Ascending by file path.
pub fn sort_by_file_path(a: &MessageDetail, b: &MessageDetail) -> Ordering {
    a.file_path.cmp(&b.file_path)
}

/// Print the console report to stdout.
pub fn print_console_report(results: &[RuleResult], sort: SortOption) {
    print!("{}", compose_console_report(results, sort, use_colors()));
}

/// Compose the console report (pure) for printing and tests.
pub fn compose_console_report(results: &[RuleResult], sort: SortOption, color: bool) -> String {
    let mut sorted: Vec<&RuleResult> = results.iter().collect();
    sorted.sort_by(|a, b| match sort {
        SortOption::Severity => sort_by_severity(a, b),
        SortOption::Rule => sort_by_rule_id(a, b),
    });

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    let mut total_fixable = 0usize;

    let mut out = String::new();
    let header = "--- CLI Report ---";
    if color {
        out.push_str(&format!("\n{}\n", header.cyan().bold()));
    } else {
        out.push_str(&format!("\n{}\n", header));
    }

    for r in sorted {
        total_errors += r.errors;
        total_warnings += r.warnings;
        total_fixable += r.fixable;

        let mut stats: Vec<String> = Vec::new();
        if r.errors > 0 {
            let s = format!("{} errors", r.errors);
            stats.push(if color { s.red().to_string() } else { s });
        }
        if r.warnings > 0 {
            let s = format!("{} warnings", r.warnings);
            stats.push(if color { s.yellow().to_string() } else { s });
        }
        if r.fixable > 0 {
            let s = format!("{} fixable", r.fixable);
            stats.push(if color { s.green().to_string() } else { s });
        }

        let rule_id = if color {
            r.rule_id.bold().to_string()
        } else {
            r.rule_id.clone()
        };
        out.push_str(&format!("\n{} ({})\n", rule_id, stats.join(" | ")));

        let mut details: Vec<&MessageDetail> = r.details.iter().collect();
        details.sort_by(|a, b| sort_by_file_path(a, b));
        for d in details {
            if color {
                out.push_str(&format!(
                    "  {} {}:{}:{} {} {}\n",
                    "->".dimmed(),
                    d.file_path.blue(),
                    d.line.magenta(),
                    d.column.magenta(),
                    "-".dimmed(),
                    d.message
                ));
            } else {
                out.push_str(&format!(
                    "  -> {}:{}:{} - {}\n",
                    d.file_path, d.line, d.column, d.message
                ));
            }
        }
    }

    let divider = "------------------";
    if color {
        out.push_str(&format!("\n{}\n", divider.cyan()));
    } else {
        out.push_str(&format!("\n{}\n", divider));
    }

    // Totals always carry all three counts, zeros included.
    let err_s = format!("{} errors", total_errors);
    let warn_s = format!("{} warnings", total_warnings);
    let fix_s = format!("{} fixable", total_fixable);
    let totals = if color {
        format!(
            "{} | {} | {}",
            err_s.red().bold(),
            warn_s.yellow().bold(),
            fix_s.green().bold()
        )
    } else {
        format!("{} | {} | {}", err_s, warn_s, fix_s)
    };
    let label = if color {
        "Totals".bold().to_string()
    } else {
        "Totals".to_string()
    };
    out.push_str(&format!("{} | {}\n\n", label, totals));
    out
}
