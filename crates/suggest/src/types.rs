use serde::{Deserialize, Serialize};

/// How often an extension was touched by past fixes, with its most
/// frequent issue labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSuggestion {
    pub file_type: String,
    pub frequency: u64,
    /// Top labels as (label, count), most frequent first
    pub common_issues: Vec<(String, u64)>,
}

/// A code pattern from a similar successful fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSuggestion {
    pub pattern: String,
    pub success_rate: f64,
    pub frequency: u64,
}

/// A fix strategy from a similar successful fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySuggestion {
    pub strategy: String,
    pub success_rate: f64,
    pub frequency: u64,
}

/// Transient suggestion bundle; never persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub file_suggestions: Vec<FileSuggestion>,
    pub pattern_suggestions: Vec<PatternSuggestion>,
    pub strategy_suggestions: Vec<StrategySuggestion>,
}

impl SuggestionSet {
    pub fn is_empty(&self) -> bool {
        self.file_suggestions.is_empty()
            && self.pattern_suggestions.is_empty()
            && self.strategy_suggestions.is_empty()
    }
}
