use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Issue snapshot attached to a fix attempt.
///
/// Missing title/body deserialize to empty strings; malformed issue input
/// is never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Metadata describing one attempted fix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixData {
    /// Code patterns identified while producing the fix
    #[serde(default)]
    pub patterns_found: Vec<String>,

    /// Name of the strategy that produced the fix, if any
    #[serde(default)]
    pub strategy: Option<String>,

    /// Per-file change descriptions
    #[serde(default)]
    pub changes: BTreeMap<String, String>,
}

/// One fix attempt as appended to the log; never mutated once written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixAttemptRecord {
    pub recorded_at_unix_ms: u64,
    pub issue: Issue,
    pub affected_files: Vec<String>,
    pub fix: FixData,
    pub success: bool,
}

/// Count/success tallies plus a nested frequency map.
///
/// For file extensions the nested map tallies issue labels; for code
/// patterns and strategies it is kept for related-key frequencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub count: u64,
    pub success_count: u64,
    #[serde(default)]
    pub related: BTreeMap<String, u64>,
}

impl StatEntry {
    /// Success ratio; `None` when nothing has been counted, so zero-count
    /// entries are excluded from ranking instead of dividing by zero.
    pub fn success_rate(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.success_count as f64 / self.count as f64)
        }
    }
}

/// Aggregated statistics keyed independently by file extension, code
/// pattern, and fix strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStats {
    #[serde(default)]
    pub file_patterns: BTreeMap<String, StatEntry>,
    #[serde(default)]
    pub code_patterns: BTreeMap<String, StatEntry>,
    #[serde(default)]
    pub fix_strategies: BTreeMap<String, StatEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_has_no_success_rate() {
        assert_eq!(StatEntry::default().success_rate(), None);
    }

    #[test]
    fn success_rate_is_ratio() {
        let entry = StatEntry {
            count: 10,
            success_count: 8,
            related: BTreeMap::new(),
        };
        assert_eq!(entry.success_rate(), Some(0.8));
    }

    #[test]
    fn issue_tolerates_missing_fields() {
        let issue: Issue = serde_json::from_str(r#"{"labels": ["bug"]}"#).unwrap();
        assert_eq!(issue.title, "");
        assert_eq!(issue.body, "");
        assert_eq!(issue.labels, vec!["bug".to_string()]);
    }
}
