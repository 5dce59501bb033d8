use crate::error::Result;
use crate::learner;
use crate::types::{FixAttemptRecord, FixData, Issue, PatternStats};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const FIXES_FILE_NAME: &str = "learned_fixes.json";
const PATTERNS_FILE_NAME: &str = "learned_patterns.json";

/// Persistent store for the fix-attempt log and pattern statistics.
///
/// Learning takes `&mut self`, so read-modify-write cycles on the two
/// documents are serialized by the borrow checker rather than a lock.
pub struct MemoryStore {
    dir: PathBuf,
    fixes: Vec<FixAttemptRecord>,
    stats: PatternStats,
}

impl MemoryStore {
    /// Open the store rooted at `dir`. A missing or corrupt document is
    /// replaced with an empty default and a warning; opening never fails.
    pub async fn open(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let fixes = load_or_default(&dir.join(FIXES_FILE_NAME)).await;
        let stats = load_or_default(&dir.join(PATTERNS_FILE_NAME)).await;
        Self { dir, fixes, stats }
    }

    /// Record one fix attempt: append it to the log, fold it into the
    /// statistics, and flush both documents together.
    pub async fn learn_from_fix(
        &mut self,
        issue: Issue,
        files: Vec<String>,
        fix: FixData,
        success: bool,
    ) -> Result<()> {
        let record = FixAttemptRecord {
            recorded_at_unix_ms: unix_now_ms(),
            issue,
            affected_files: files,
            fix,
            success,
        };
        learner::apply_fix_attempt(&mut self.stats, &record);
        self.fixes.push(record);
        self.flush().await?;
        log::info!(
            "recorded fix attempt (success: {success}); {} attempts total",
            self.fixes.len()
        );
        Ok(())
    }

    /// The append-only fix-attempt log, oldest first
    pub fn records(&self) -> &[FixAttemptRecord] {
        &self.fixes
    }

    pub fn stats(&self) -> &PatternStats {
        &self.stats
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write both documents, each via write-temporary-then-rename so a
    /// crash mid-flush never leaves a half-written document.
    async fn flush(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        write_atomic(&self.dir.join(FIXES_FILE_NAME), &self.fixes).await?;
        write_atomic(&self.dir.join(PATTERNS_FILE_NAME), &self.stats).await?;
        Ok(())
    }
}

async fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return T::default(),
        Err(e) => {
            log::warn!("failed to read {}: {e}; starting empty", path.display());
            return T::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("corrupt document {}: {e}; starting empty", path.display());
            T::default()
        }
    }
}

async fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> Issue {
        Issue {
            title: "Crash when saving".into(),
            body: "Null reference in save path".into(),
            labels: vec!["bug".into()],
        }
    }

    #[tokio::test]
    async fn open_on_empty_dir_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::open(dir.path()).await;
        assert!(store.records().is_empty());
        assert!(store.stats().file_patterns.is_empty());
    }

    #[tokio::test]
    async fn learn_updates_log_and_stats_together() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::open(dir.path()).await;

        store
            .learn_from_fix(
                sample_issue(),
                vec!["save.cs".into()],
                FixData {
                    patterns_found: vec!["null-check".into()],
                    strategy: Some("guard-clause".into()),
                    changes: Default::default(),
                },
                true,
            )
            .await
            .unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.stats().file_patterns[".cs"].count, 1);
        assert_eq!(store.stats().code_patterns["null-check"].success_count, 1);
        assert_eq!(store.stats().fix_strategies["guard-clause"].count, 1);
    }

    #[tokio::test]
    async fn flush_leaves_no_temporaries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::open(dir.path()).await;
        store
            .learn_from_fix(sample_issue(), vec!["a.py".into()], FixData::default(), false)
            .await
            .unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
