use crate::graph::DepGraph;
use crate::provider::ContentProvider;
use crate::types::{ChangeImpact, FileRecord, RiskLevel};
use fixlore_extract::{defined_symbols, references_symbol, Dialect};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

const MAX_FETCH_CONCURRENCY: usize = 32;
const DEFAULT_FETCH_CONCURRENCY: usize = 8;

fn fetch_concurrency_from_env() -> usize {
    std::env::var("FIXLORE_FETCH_CONCURRENCY")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_FETCH_CONCURRENCY)
        .clamp(1, MAX_FETCH_CONCURRENCY)
}

/// Two-pass dependency analyzer over a set of candidate files.
///
/// Owns a session graph that is rebuilt from scratch on every `analyze`
/// call; closure and impact queries read whatever the last call produced.
pub struct DependencyAnalyzer<P> {
    provider: Arc<P>,
    graph: DepGraph,
    fetch_limit: usize,
}

impl<P: ContentProvider + 'static> DependencyAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self::with_fetch_limit(provider, fetch_concurrency_from_env())
    }

    pub fn with_fetch_limit(provider: P, fetch_limit: usize) -> Self {
        Self {
            provider: Arc::new(provider),
            graph: DepGraph::new(),
            fetch_limit: fetch_limit.clamp(1, MAX_FETCH_CONCURRENCY),
        }
    }

    /// Analyze dependencies between the given files.
    ///
    /// Clears prior graph state, fetches content with bounded parallelism,
    /// runs the definition pass over every file, then the reference pass
    /// against the completed symbol table. Unreadable files degrade to empty
    /// records; nothing here is fatal.
    pub async fn analyze(&mut self, files: &[String]) -> HashMap<String, FileRecord> {
        self.graph.clear();

        let mut seen = HashSet::new();
        let targets: Vec<String> = files
            .iter()
            .filter(|path| seen.insert(path.as_str()))
            .cloned()
            .collect();

        let contents = self.fetch_all(&targets).await;

        // Pass 1: collect every file's defined symbols
        let mut table: Vec<(String, Dialect, BTreeSet<String>)> =
            Vec::with_capacity(contents.len());
        for (path, text) in &contents {
            let dialect = Dialect::from_path(path);
            let defined = match text {
                Some(text) => defined_symbols(dialect, text),
                None => BTreeSet::new(),
            };
            self.graph.insert_file(path, defined.clone());
            table.push((path.clone(), dialect, defined));
        }

        // Pass 2: match each file's text against symbols defined elsewhere.
        // First matching usage pattern wins per symbol; edges collapse.
        for (path, text) in &contents {
            let Some(text) = text else { continue };
            for (other_path, other_dialect, other_symbols) in &table {
                if other_path == path {
                    continue;
                }
                for symbol in other_symbols {
                    if references_symbol(*other_dialect, symbol, text) {
                        self.graph.add_symbol_use(path, symbol.clone());
                        self.graph.add_reference(path, other_path);
                    }
                }
            }
        }

        files
            .iter()
            .filter_map(|path| self.graph.record(path).map(|record| (path.clone(), record)))
            .collect()
    }

    /// Full set of files that might need to change together with
    /// `primary_files`: the closure over reference edges in both directions.
    /// Always a superset of the input and idempotent under re-application.
    pub fn get_affected_files(&self, primary_files: &[String]) -> Vec<String> {
        self.graph.closure(primary_files)
    }

    /// Per-file impact of changing the given files. Files absent from the
    /// graph are omitted, not an error.
    pub fn analyze_change_impact(&self, files: &[String]) -> HashMap<String, ChangeImpact> {
        let mut impacts = HashMap::new();
        for path in files {
            let Some(record) = self.graph.record(path) else {
                continue;
            };
            let dependent_files: Vec<String> = record.referenced_by.iter().cloned().collect();
            impacts.insert(
                path.clone(),
                ChangeImpact {
                    risk_level: RiskLevel::from_dependent_count(dependent_files.len()),
                    direct_dependencies: record.references.into_iter().collect(),
                    dependent_files,
                    symbols_affected: record.symbols_defined.into_iter().collect(),
                },
            );
        }
        impacts
    }

    async fn fetch_all(&self, paths: &[String]) -> Vec<(String, Option<String>)> {
        let semaphore = Arc::new(Semaphore::new(self.fetch_limit));
        let mut tasks = JoinSet::new();
        for (slot, path) in paths.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&semaphore);
            let path = path.clone();
            tasks.spawn(async move {
                // The semaphore is never closed; acquire failures are not expected.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .unwrap_or_else(|_| unreachable!("fetch semaphore closed"));
                let content = match provider.fetch(&path).await {
                    Ok(Some(text)) => Some(text),
                    Ok(None) => {
                        log::warn!("content unavailable for {path}; recording it empty");
                        None
                    }
                    Err(e) => {
                        log::warn!("failed to read {path}: {e}");
                        None
                    }
                };
                (slot, content)
            });
        }

        let mut slots: Vec<Option<Option<String>>> = vec![None; paths.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, content)) => slots[slot] = Some(content),
                Err(e) => log::warn!("fetch task failed: {e}"),
            }
        }

        paths
            .iter()
            .zip(slots)
            .map(|(path, slot)| (path.clone(), slot.flatten()))
            .collect()
    }
}
