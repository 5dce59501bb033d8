use crate::types::FileRecord;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// One file node in the session graph
#[derive(Debug)]
struct FileNode {
    path: String,
    symbols_defined: BTreeSet<String>,
    symbols_used: BTreeSet<String>,
}

/// Session-scoped dependency graph over files.
///
/// Edges point from the using file to the defining file. Storing both
/// directions in one `DiGraph` keeps the outgoing/incoming views of any edge
/// consistent by construction.
#[derive(Debug, Default)]
pub struct DepGraph {
    graph: DiGraph<FileNode, ()>,
    path_index: HashMap<String, NodeIndex>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all nodes and edges; called at the start of every analysis run
    pub fn clear(&mut self) {
        self.graph.clear();
        self.path_index.clear();
    }

    /// Insert a file node with its defined-symbol set, replacing any
    /// previous symbols for the same path
    pub fn insert_file(&mut self, path: &str, symbols_defined: BTreeSet<String>) -> NodeIndex {
        match self.path_index.get(path) {
            Some(&idx) => {
                self.graph[idx].symbols_defined = symbols_defined;
                idx
            }
            None => {
                let idx = self.graph.add_node(FileNode {
                    path: path.to_string(),
                    symbols_defined,
                    symbols_used: BTreeSet::new(),
                });
                self.path_index.insert(path.to_string(), idx);
                idx
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.path_index.contains_key(path)
    }

    /// Record that `user` uses `symbol`; no-op if `user` is not a node
    pub fn add_symbol_use(&mut self, user: &str, symbol: String) {
        if let Some(&idx) = self.path_index.get(user) {
            self.graph[idx].symbols_used.insert(symbol);
        }
    }

    /// Add a reference edge from `user` to `definer`. Duplicate edges are
    /// collapsed; both endpoints must already be nodes.
    pub fn add_reference(&mut self, user: &str, definer: &str) {
        let (Some(&from), Some(&to)) = (self.path_index.get(user), self.path_index.get(definer))
        else {
            return;
        };
        self.graph.update_edge(from, to, ());
    }

    pub fn symbols_defined(&self, path: &str) -> Option<&BTreeSet<String>> {
        let idx = *self.path_index.get(path)?;
        Some(&self.graph[idx].symbols_defined)
    }

    /// Outgoing references: files `path` uses symbols from
    pub fn outgoing(&self, path: &str) -> BTreeSet<String> {
        self.neighbor_paths(path, Direction::Outgoing)
    }

    /// Incoming references: files that use symbols from `path`
    pub fn incoming(&self, path: &str) -> BTreeSet<String> {
        self.neighbor_paths(path, Direction::Incoming)
    }

    fn neighbor_paths(&self, path: &str, direction: Direction) -> BTreeSet<String> {
        let Some(&idx) = self.path_index.get(path) else {
            return BTreeSet::new();
        };
        self.graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].path.clone())
            .collect()
    }

    /// Materialize the full record for one file, if it is a node
    pub fn record(&self, path: &str) -> Option<FileRecord> {
        let &idx = self.path_index.get(path)?;
        let node = &self.graph[idx];
        Some(FileRecord {
            path: node.path.clone(),
            symbols_defined: node.symbols_defined.clone(),
            symbols_used: node.symbols_used.clone(),
            references: self.outgoing(path),
            referenced_by: self.incoming(path),
        })
    }

    /// Breadth-first closure from `start` following edges in both
    /// directions. Always a superset of `start`; paths without a node are
    /// kept but not expanded.
    pub fn closure(&self, start: &[String]) -> Vec<String> {
        let mut visited: BTreeSet<String> = start.iter().cloned().collect();
        let mut frontier: VecDeque<String> = start.iter().cloned().collect();

        while let Some(current) = frontier.pop_front() {
            let Some(&idx) = self.path_index.get(&current) else {
                continue;
            };
            let neighbors = self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .chain(self.graph.neighbors_directed(idx, Direction::Incoming));
            for neighbor in neighbors {
                let path = &self.graph[neighbor].path;
                if visited.insert(path.clone()) {
                    frontier.push_back(path.clone());
                }
            }
        }

        visited.into_iter().collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
