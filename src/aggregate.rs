//! Folds raw per-file findings into one summary record per rule id.
//!
//! Results seed from the requested rule set in mapping order, then grow
//! lazily for rule ids the engine surfaced on its own. Only rules with at
//! least one error or warning survive the final pass.

use crate::models::{FileReport, MessageDetail, RuleConfig, RuleResult, RuleSet, Severity};
use std::collections::HashMap;
use std::path::Path;

/// Rule id substituted when a finding carries none.
pub const UNKNOWN_RULE_ID: &str = "unknown";

/// Fold `reports` into per-rule summaries.
///
/// Requested rules come first, in the mapping's iteration order; rules the
/// engine reported without being requested follow in first-encountered
/// order, tagged `RuleConfig::NotRequested`. Detail paths are made relative
/// to `cwd`. Rules with zero findings are dropped from the output.
pub fn aggregate(cwd: &Path, rules: &RuleSet, reports: &[FileReport]) -> Vec<RuleResult> {
    let mut results: Vec<RuleResult> = Vec::with_capacity(rules.len());
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(rules.len());

    for (rule_id, config) in rules {
        slots.insert(rule_id.clone(), results.len());
        results.push(RuleResult::new(
            rule_id.clone(),
            RuleConfig::Requested(config.clone()),
        ));
    }

    for report in reports {
        for msg in &report.messages {
            let rule_id = msg.rule_id.as_deref().unwrap_or(UNKNOWN_RULE_ID);
            let slot = match slots.get(rule_id) {
                Some(&i) => i,
                None => {
                    slots.insert(rule_id.to_string(), results.len());
                    results.push(RuleResult::new(rule_id, RuleConfig::NotRequested));
                    results.len() - 1
                }
            };
            let entry = &mut results[slot];
            match msg.severity {
                Severity::Error => entry.errors += 1,
                Severity::Warning => entry.warnings += 1,
            }
            if msg.fix.is_some() {
                entry.fixable += 1;
            }
            entry.details.push(MessageDetail {
                file_path: relative_to(cwd, &report.file_path),
                line: msg.line,
                column: msg.column,
                message: msg.message.clone(),
            });
        }
    }

    results
        .into_iter()
        .filter(|r| r.errors + r.warnings > 0)
        .collect()
}

fn relative_to(cwd: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, cwd)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawMessage;
    use serde_json::json;

    fn rule_set(entries: &[(&str, serde_json::Value)]) -> RuleSet {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn msg(rule_id: Option<&str>, severity: Severity, fixable: bool) -> RawMessage {
        RawMessage {
            rule_id: rule_id.map(String::from),
            severity,
            line: 1,
            column: 1,
            message: "msg".into(),
            fix: fixable.then(|| json!({"range": [0, 1], "text": ""})),
        }
    }

    fn report(file_path: &str, messages: Vec<RawMessage>) -> FileReport {
        FileReport {
            file_path: file_path.into(),
            messages,
        }
    }

    #[test]
    fn test_empty_input_drops_all_seeded_rules() {
        let rules = rule_set(&[("no-console", json!("error")), ("eqeqeq", json!("warn"))]);
        let out = aggregate(Path::new("/repo"), &rules, &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_counts_and_details_per_rule() {
        let rules = rule_set(&[("no-console", json!("error"))]);
        let reports = vec![report(
            "/repo/src/a.ts",
            vec![
                msg(Some("no-console"), Severity::Error, false),
                msg(Some("no-console"), Severity::Warning, true),
            ],
        )];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        assert_eq!(out.len(), 1);
        let r = &out[0];
        assert_eq!(r.errors, 1);
        assert_eq!(r.warnings, 1);
        assert_eq!(r.fixable, 1);
        assert_eq!(r.details.len(), r.errors + r.warnings);
        assert_eq!(r.details[0].file_path, "src/a.ts");
        assert_eq!(r.config, RuleConfig::Requested(json!("error")));
    }

    #[test]
    fn test_total_counts_match_message_count() {
        let rules = rule_set(&[("a", json!("error"))]);
        let reports = vec![
            report(
                "/repo/x.ts",
                vec![
                    msg(Some("a"), Severity::Error, false),
                    msg(Some("b"), Severity::Warning, false),
                ],
            ),
            report("/repo/y.ts", vec![msg(None, Severity::Error, true)]),
        ];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        let total: usize = out.iter().map(|r| r.errors + r.warnings).sum();
        assert_eq!(total, 3);
        for r in &out {
            assert_eq!(r.errors + r.warnings, r.details.len());
            assert!(r.fixable <= r.errors + r.warnings);
        }
    }

    #[test]
    fn test_missing_rule_id_aggregates_under_unknown() {
        let rules = RuleSet::new();
        let reports = vec![report("/repo/x.ts", vec![msg(None, Severity::Error, false)])];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule_id, UNKNOWN_RULE_ID);
        assert_eq!(out[0].config, RuleConfig::NotRequested);
    }

    #[test]
    fn test_unrequested_rule_is_surfaced_not_dropped() {
        let rules = rule_set(&[("requested", json!("error"))]);
        let reports = vec![report(
            "/repo/x.ts",
            vec![msg(Some("unrequested"), Severity::Error, false)],
        )];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rule_id, "unrequested");
        assert_eq!(out[0].config, RuleConfig::NotRequested);
    }

    #[test]
    fn test_insertion_order_requested_first_then_encountered() {
        let rules = rule_set(&[("b-rule", json!("warn")), ("a-rule", json!("error"))]);
        let reports = vec![report(
            "/repo/x.ts",
            vec![
                msg(Some("z-extra"), Severity::Error, false),
                msg(Some("a-rule"), Severity::Error, false),
                msg(Some("b-rule"), Severity::Warning, false),
            ],
        )];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        let ids: Vec<&str> = out.iter().map(|r| r.rule_id.as_str()).collect();
        // Mapping order for requested rules, then first-encountered extras.
        assert_eq!(ids, ["b-rule", "a-rule", "z-extra"]);
    }

    #[test]
    fn test_path_outside_cwd_keeps_parent_relative_form() {
        let rules = RuleSet::new();
        let reports = vec![report(
            "/elsewhere/x.ts",
            vec![msg(Some("r"), Severity::Error, false)],
        )];
        let out = aggregate(Path::new("/repo"), &rules, &reports);
        assert_eq!(out[0].details[0].file_path, "../elsewhere/x.ts");
    }
}
