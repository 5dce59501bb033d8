//! # Fixlore Extract
//!
//! Heuristic symbol extraction from source text.
//!
//! Extraction is lexical, not AST-based: each dialect carries a fixed,
//! ordered list of regex patterns for symbol definitions and another for
//! symbol usages. Results are best-effort, never sound or complete.
//!
//! ```text
//! file path ──> Dialect (by extension)
//!                  │
//!                  ├──> definition patterns ──> defined symbol set
//!                  └──> usage patterns     ──> "does this text use S?"
//! ```
//!
//! Unrecognized extensions yield an empty symbol set and a bare
//! word-boundary usage pattern; they are never an error.

mod dialect;
mod symbols;
mod usage;

pub use dialect::Dialect;
pub use symbols::defined_symbols;
pub use usage::{references_symbol, MIN_REFERENCE_SYMBOL_LEN};
