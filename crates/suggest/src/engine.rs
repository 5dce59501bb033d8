use crate::similarity::{jaccard, tokenize};
use crate::types::{FileSuggestion, PatternSuggestion, StrategySuggestion, SuggestionSet};
use fixlore_memory::{file_extension, FixAttemptRecord, Issue, MemoryStore};

/// Ranks historical fix data against a new issue.
///
/// Only *successful* past attempts participate in similarity retrieval,
/// and only patterns/strategies whose aggregate success rate clears the
/// success threshold are surfaced.
pub struct SuggestionEngine {
    similarity_threshold: f64,
    success_threshold: f64,
    max_similar: usize,
    max_labels: usize,
}

impl SuggestionEngine {
    pub fn new(similarity_threshold: f64, success_threshold: f64) -> Self {
        Self {
            similarity_threshold,
            success_threshold,
            max_similar: 3,
            max_labels: 3,
        }
    }

    /// Build a suggestion set for `issue` and its candidate `files`, or
    /// `None` when nothing clears the thresholds ("no signal").
    pub fn suggest(
        &self,
        store: &MemoryStore,
        issue: &Issue,
        files: &[String],
    ) -> Option<SuggestionSet> {
        let mut suggestions = SuggestionSet::default();
        let stats = store.stats();

        for file in files {
            let ext = file_extension(file);
            let Some(entry) = stats.file_patterns.get(&ext) else {
                continue;
            };
            if entry.count == 0 {
                continue;
            }
            let mut labels: Vec<(String, u64)> = entry
                .related
                .iter()
                .map(|(label, count)| (label.clone(), *count))
                .collect();
            labels.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            labels.truncate(self.max_labels);
            suggestions.file_suggestions.push(FileSuggestion {
                file_type: ext,
                frequency: entry.count,
                common_issues: labels,
            });
        }

        let issue_tokens = tokenize(&format!("{} {}", issue.title, issue.body));
        let mut similar: Vec<(f64, &FixAttemptRecord)> = store
            .records()
            .iter()
            .filter(|record| record.success)
            .filter_map(|record| {
                let record_tokens =
                    tokenize(&format!("{} {}", record.issue.title, record.issue.body));
                let score = jaccard(&issue_tokens, &record_tokens);
                (score > self.similarity_threshold).then_some((score, record))
            })
            .collect();
        similar.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        for (_score, record) in similar.iter().take(self.max_similar) {
            for pattern in &record.fix.patterns_found {
                let Some(entry) = stats.code_patterns.get(pattern) else {
                    continue;
                };
                match entry.success_rate() {
                    Some(rate) if rate > self.success_threshold => {
                        suggestions.pattern_suggestions.push(PatternSuggestion {
                            pattern: pattern.clone(),
                            success_rate: rate,
                            frequency: entry.count,
                        });
                    }
                    _ => {}
                }
            }

            if let Some(strategy) = record.fix.strategy.as_deref() {
                let Some(entry) = stats.fix_strategies.get(strategy) else {
                    continue;
                };
                match entry.success_rate() {
                    Some(rate) if rate > self.success_threshold => {
                        suggestions.strategy_suggestions.push(StrategySuggestion {
                            strategy: strategy.to_string(),
                            success_rate: rate,
                            frequency: entry.count,
                        });
                    }
                    _ => {}
                }
            }
        }

        if suggestions.is_empty() {
            log::debug!("no suggestion cleared the thresholds");
            None
        } else {
            Some(suggestions)
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(0.5, 0.7)
    }
}
