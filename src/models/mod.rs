//! Shared data models for the lint run and both report renderers.

use serde::Deserialize;
use serde_json::Value as Json;

/// Requested rule ids mapped to their opaque configuration values.
///
/// Backed by serde_json's order-preserving map, so aggregation seeds
/// results in the order the rules file declares them.
pub type RuleSet = serde_json::Map<String, Json>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
/// Diagnostic severity, as the engine's numeric levels (1|2).
pub enum Severity {
    Warning,
    Error,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity value {other}, expected 1 or 2")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One raw finding as emitted by the engine's JSON formatter.
pub struct RawMessage {
    pub rule_id: Option<String>,
    pub severity: Severity,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub column: usize,
    pub message: String,
    /// Present when the engine can auto-correct the finding.
    pub fix: Option<Json>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-file batch of raw findings. `file_path` is absolute at emission time.
pub struct FileReport {
    pub file_path: std::path::PathBuf,
    pub messages: Vec<RawMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The retained projection of a raw finding: path relative to the run's
/// working directory, position, and message text.
pub struct MessageDetail {
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Configuration attached to an aggregated rule: the value from the
/// requested set, or a marker for rules the engine surfaced on its own.
pub enum RuleConfig {
    Requested(Json),
    NotRequested,
}

#[derive(Debug, Clone, PartialEq)]
/// Aggregated statistics for one rule id.
pub struct RuleResult {
    pub rule_id: String,
    pub config: RuleConfig,
    pub errors: usize,
    pub warnings: usize,
    pub fixable: usize,
    pub details: Vec<MessageDetail>,
}

impl RuleResult {
    /// Fresh zero-count result for `rule_id`.
    pub fn new(rule_id: impl Into<String>, config: RuleConfig) -> Self {
        Self {
            rule_id: rule_id.into(),
            config,
            errors: 0,
            warnings: 0,
            fixable: 0,
            details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_engine_levels() {
        let msg: RawMessage = serde_json::from_str(
            r#"{"ruleId":"no-console","severity":2,"line":3,"column":9,"message":"boom"}"#,
        )
        .unwrap();
        assert_eq!(msg.severity, Severity::Error);
        assert!(msg.fix.is_none());
    }

    #[test]
    fn test_severity_rejects_unknown_level() {
        let res: Result<Severity, _> = serde_json::from_str("3");
        assert!(res.is_err());
    }

    #[test]
    fn test_file_report_wire_shape() {
        let rep: FileReport = serde_json::from_str(
            r#"{"filePath":"/tmp/a.ts","messages":[{"ruleId":null,"severity":1,"line":1,"column":1,"message":"m","fix":{"range":[0,1],"text":""}}]}"#,
        )
        .unwrap();
        assert_eq!(rep.messages.len(), 1);
        assert!(rep.messages[0].rule_id.is_none());
        assert!(rep.messages[0].fix.is_some());
    }
}
