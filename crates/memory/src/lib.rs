//! # Fixlore Memory
//!
//! Durable memory of past fix attempts.
//!
//! Two JSON documents live under a configurable directory: an append-only
//! log of fix attempts (`learned_fixes.json`) and aggregated pattern
//! statistics (`learned_patterns.json`). Both are loaded on open and
//! rewritten atomically on every recorded attempt. A missing or corrupt
//! document is replaced by an empty default, never a fatal error.

mod error;
mod learner;
mod store;
mod types;

pub use error::{MemoryError, Result};
pub use learner::{apply_fix_attempt, file_extension};
pub use store::MemoryStore;
pub use types::{FixAttemptRecord, FixData, Issue, PatternStats, StatEntry};
