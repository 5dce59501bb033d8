use crate::types::{FixAttemptRecord, PatternStats};
use std::path::Path;

/// Extension of `path` including its leading dot, or an empty string for
/// extensionless paths
pub fn file_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Fold one recorded fix attempt into the aggregated statistics.
///
/// Every affected file bumps its extension entry and that entry's label
/// frequencies; every found pattern and the named strategy bump their count
/// and, on success, their success count.
pub fn apply_fix_attempt(stats: &mut PatternStats, record: &FixAttemptRecord) {
    for file in &record.affected_files {
        let entry = stats
            .file_patterns
            .entry(file_extension(file))
            .or_default();
        entry.count += 1;
        for label in &record.issue.labels {
            *entry.related.entry(label.clone()).or_insert(0) += 1;
        }
    }

    for pattern in &record.fix.patterns_found {
        let entry = stats.code_patterns.entry(pattern.clone()).or_default();
        entry.count += 1;
        if record.success {
            entry.success_count += 1;
        }
    }

    if let Some(strategy) = record.fix.strategy.as_deref() {
        if !strategy.is_empty() {
            let entry = stats
                .fix_strategies
                .entry(strategy.to_string())
                .or_default();
            entry.count += 1;
            if record.success {
                entry.success_count += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FixData, Issue};
    use pretty_assertions::assert_eq;

    fn attempt(files: &[&str], labels: &[&str], patterns: &[&str], strategy: Option<&str>, success: bool) -> FixAttemptRecord {
        FixAttemptRecord {
            recorded_at_unix_ms: 0,
            issue: Issue {
                title: "t".into(),
                body: "b".into(),
                labels: labels.iter().map(|l| l.to_string()).collect(),
            },
            affected_files: files.iter().map(|f| f.to_string()).collect(),
            fix: FixData {
                patterns_found: patterns.iter().map(|p| p.to_string()).collect(),
                strategy: strategy.map(|s| s.to_string()),
                changes: Default::default(),
            },
            success,
        }
    }

    #[test]
    fn extension_includes_leading_dot() {
        assert_eq!(file_extension("src/Widget.cs"), ".cs");
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension(".gitignore"), "");
    }

    #[test]
    fn attempt_bumps_extension_and_labels() {
        let mut stats = PatternStats::default();
        apply_fix_attempt(
            &mut stats,
            &attempt(&["a.cs", "b.cs", "c.py"], &["bug", "ui"], &[], None, true),
        );

        let cs = &stats.file_patterns[".cs"];
        assert_eq!(cs.count, 2);
        assert_eq!(cs.related["bug"], 2);
        assert_eq!(cs.related["ui"], 2);
        assert_eq!(stats.file_patterns[".py"].count, 1);
    }

    #[test]
    fn patterns_track_success_separately() {
        let mut stats = PatternStats::default();
        apply_fix_attempt(&mut stats, &attempt(&[], &[], &["null-check"], None, true));
        apply_fix_attempt(&mut stats, &attempt(&[], &[], &["null-check"], None, false));

        let entry = &stats.code_patterns["null-check"];
        assert_eq!(entry.count, 2);
        assert_eq!(entry.success_count, 1);
        assert_eq!(entry.success_rate(), Some(0.5));
    }

    #[test]
    fn empty_strategy_is_not_counted() {
        let mut stats = PatternStats::default();
        apply_fix_attempt(&mut stats, &attempt(&[], &[], &[], Some(""), true));
        apply_fix_attempt(&mut stats, &attempt(&[], &[], &[], None, true));
        assert!(stats.fix_strategies.is_empty());

        apply_fix_attempt(&mut stats, &attempt(&[], &[], &[], Some("rewrite-guard"), true));
        assert_eq!(stats.fix_strategies["rewrite-guard"].count, 1);
    }
}
