//! # Fixlore Graph
//!
//! Cross-file dependency graph and change-impact analysis.
//!
//! ```text
//! candidate files
//!     │
//!     ├──> Content fetch (bounded parallelism, degrades per file)
//!     │
//!     ├──> Pass 1: defined-symbol sets for every file
//!     │
//!     ├──> Pass 2: usage matching against the completed symbol table
//!     │      └─ Edges: using file ──> defining file
//!     │
//!     └──> DepGraph (petgraph)
//!            ├─ get_affected_files: closure over both edge directions
//!            └─ analyze_change_impact: dependents count ──> risk level
//! ```
//!
//! The graph is session-scoped: each `analyze` call rebuilds it from
//! scratch, and closure/impact queries read the last completed run. Every
//! failure mode (missing file, undecodable bytes) degrades to an empty
//! record rather than an error.

mod analyzer;
mod error;
mod graph;
mod provider;
mod types;

pub use analyzer::DependencyAnalyzer;
pub use error::{GraphError, Result};
pub use graph::DepGraph;
pub use provider::{ContentProvider, FsProvider};
pub use types::{ChangeImpact, FileRecord, RiskLevel};
