//! # Fixlore Suggest
//!
//! Suggestion retrieval over the fix-attempt memory.
//!
//! Given a new issue and its candidate files, the engine surfaces three
//! kinds of signal from past attempts:
//!
//! - file suggestions: how often each file extension was touched and which
//!   issue labels it attracts,
//! - pattern suggestions: code patterns from textually similar successful
//!   fixes, filtered by success rate,
//! - strategy suggestions: fix strategies from the same similar fixes,
//!   under the same filter.
//!
//! Similarity is a Jaccard index over lowercased whitespace tokens of the
//! issue title and body. An empty result set yields `None`: "no signal",
//! not a failure.

mod engine;
mod similarity;
mod types;

pub use engine::SuggestionEngine;
pub use similarity::{jaccard, tokenize};
pub use types::{FileSuggestion, PatternSuggestion, StrategySuggestion, SuggestionSet};
