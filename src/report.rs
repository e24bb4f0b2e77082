//! Standalone HTML report generation.
//!
//! Pure rendering: input order is preserved as given (the console sort is
//! an independent concern) and the document is self-contained, with inline
//! style and an inline expand/collapse toggle per rule row.

use crate::models::{RuleConfig, RuleResult};

/// File the driver writes the report to, resolved against the run's
/// working directory and overwritten on every run.
pub const REPORT_FILE_NAME: &str = "eslint-incremental-report.html";

const TITLE: &str = "ESLint rule trial";

const STYLE: &str = "\t<style>
\t\tbody { font-family: sans-serif; margin: 2rem; }
\t\ttable { border-collapse: collapse; width: 100%; }
\t\tth, td { border: 1px solid #ddd; padding: 8px; text-align: right; vertical-align: top; }
\t\tth:first-child, td:first-child, th:nth-child(2), td:nth-child(2) { text-align: left; }
\t\tul { margin: 0; padding-left: 20px; font-size: 0.9em; }
\t\ttfoot { font-weight: bold; background: #eee; }
\t</style>
";

const INACTIVE_TOGGLE: &str = "<span style=\"color:#ccc;\">&#x25B6;</span>";

const ACTIVE_TOGGLE: &str = "<span style=\"cursor:pointer;\" onclick=\"const r=this.closest('tr').nextElementSibling;r.style.display=r.style.display==='none'?'table-row':'none';this.innerHTML=r.style.display==='none'?'&#x25B6;':'&#x25BC;'\">&#x25B6;</span>";

/// Escape `&`, `<`, `>` for interpolation into HTML.
///
/// `&` is rewritten first so entities introduced by the other two
/// substitutions survive untouched.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the aggregated results as one self-contained HTML document.
pub fn generate_html(results: &[RuleResult]) -> String {
    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    let mut total_fixable = 0usize;

    let mut rows = String::new();
    for r in results {
        total_errors += r.errors;
        total_warnings += r.warnings;
        total_fixable += r.fixable;

        let config = match &r.config {
            RuleConfig::Requested(value) => escape_html(&value.to_string()),
            RuleConfig::NotRequested => "N/A".to_string(),
        };

        let (toggle, details_row) = if r.details.is_empty() {
            (INACTIVE_TOGGLE, String::new())
        } else {
            let mut items = String::new();
            for d in &r.details {
                items.push_str(&format!(
                    "<li><code>{}:{}:{}</code> - {}</li>",
                    escape_html(&d.file_path),
                    d.line,
                    d.column,
                    escape_html(&d.message)
                ));
            }
            (
                ACTIVE_TOGGLE,
                format!(
                    "\t\t\t<tr style=\"display:none;background:#f9f9f9;\"><td colspan=\"5\"><ul>{}</ul></td></tr>\n",
                    items
                ),
            )
        };

        rows.push_str(&format!(
            "\t\t\t<tr>\n\t\t\t\t<td>{} {}</td>\n\t\t\t\t<td><code>{}</code></td>\n\t\t\t\t<td>{}</td>\n\t\t\t\t<td>{}</td>\n\t\t\t\t<td>{}</td>\n\t\t\t</tr>\n",
            toggle,
            escape_html(&r.rule_id),
            config,
            r.errors,
            r.warnings,
            r.fixable
        ));
        rows.push_str(&details_row);
    }

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\t<meta charset=\"UTF-8\">\n");
    out.push_str(&format!("\t<title>{}</title>\n", TITLE));
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("\t<h1>{}</h1>\n", TITLE));
    out.push_str("\t<table>\n\t\t<thead>\n\t\t\t<tr><th>Rule</th><th>Config</th><th>Errors</th><th>Warnings</th><th>Fixable</th></tr>\n\t\t</thead>\n\t\t<tbody>\n");
    out.push_str(&rows);
    out.push_str("\t\t</tbody>\n\t\t<tfoot>\n");
    out.push_str(&format!(
        "\t\t\t<tr>\n\t\t\t\t<td colspan=\"2\">Totals</td>\n\t\t\t\t<td>{}</td>\n\t\t\t\t<td>{}</td>\n\t\t\t\t<td>{}</td>\n\t\t\t</tr>\n",
        total_errors, total_warnings, total_fixable
    ));
    out.push_str("\t\t</tfoot>\n\t</table>\n</body>\n</html>\n");
    out
}
