use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-file analysis record: what a file defines, what it uses, and which
/// files it is connected to in the reference graph.
///
/// `references` and `referenced_by` are symmetric across records of one
/// analysis session: if B appears in A's `references`, A appears in B's
/// `referenced_by`. Both sides are materialized from the same edge set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File path, as handed to `analyze`
    pub path: String,

    /// Symbols this file defines
    pub symbols_defined: BTreeSet<String>,

    /// Symbols this file uses that are defined elsewhere
    pub symbols_used: BTreeSet<String>,

    /// Files this file references (outgoing edges)
    pub references: BTreeSet<String>,

    /// Files that reference this file (incoming edges)
    pub referenced_by: BTreeSet<String>,
}

impl FileRecord {
    pub fn empty(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbols_defined: BTreeSet::new(),
            symbols_used: BTreeSet::new(),
            references: BTreeSet::new(),
            referenced_by: BTreeSet::new(),
        }
    }
}

/// Three-valued classification of how many files depend on a given file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify by incoming-reference count: > 10 high, > 5 medium, else low
    pub fn from_dependent_count(count: usize) -> Self {
        if count > 10 {
            RiskLevel::High
        } else if count > 5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Change-impact summary for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeImpact {
    /// Files this file references
    pub direct_dependencies: Vec<String>,

    /// Files that reference this file
    pub dependent_files: Vec<String>,

    /// Symbols the file defines
    pub symbols_affected: Vec<String>,

    /// Classification derived from the dependent count alone
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_thresholds_are_exact() {
        assert_eq!(RiskLevel::from_dependent_count(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_dependent_count(5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_dependent_count(6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_dependent_count(10), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_dependent_count(11), RiskLevel::High);
        assert_eq!(RiskLevel::from_dependent_count(100), RiskLevel::High);
    }

    #[test]
    fn risk_is_monotonic() {
        let mut last = RiskLevel::Low;
        for count in 0..50 {
            let level = RiskLevel::from_dependent_count(count);
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn risk_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::High).unwrap(),
            "\"high\""
        );
    }
}
