use crate::dialect::Dialect;
use regex::Regex;

/// Symbols shorter than this are never matched as cross-file references;
/// short identifiers produce too many word-boundary collisions.
pub const MIN_REFERENCE_SYMBOL_LEN: usize = 3;

/// Ordered usage pattern sources for one symbol in one dialect.
///
/// The dialect is the one the symbol was *defined* in; its declaration style
/// determines how usages look (construction, inheritance, generics, imports).
fn usage_pattern_sources(dialect: Dialect, symbol: &str) -> Vec<String> {
    let s = regex::escape(symbol);
    match dialect {
        Dialect::CSharp => vec![
            format!(r"\b{s}\b"),
            format!(r"new\s+{s}\b"),
            format!(r":\s*{s}\b"),
            format!(r"<\s*{s}\s*>"),
        ],
        Dialect::Java => vec![
            format!(r"\b{s}\b"),
            format!(r"new\s+{s}\b"),
            format!(r"extends\s+{s}\b"),
            format!(r"implements\s+{s}\b"),
            format!(r"<\s*{s}\s*>"),
        ],
        Dialect::Python => vec![
            format!(r"\b{s}\b"),
            format!(r"from\s+\w+\s+import\s+{s}\b"),
            format!(r"import\s+{s}\b"),
        ],
        Dialect::Rust => vec![
            format!(r"\b{s}\b"),
            format!(r"{s}\s*::"),
            format!(r"use\s+[\w:]+::{s}\b"),
            format!(r"impl(?:<[^>]*>)?\s+{s}\b"),
            format!(r"<\s*{s}\s*>"),
        ],
        Dialect::JavaScript | Dialect::TypeScript => vec![
            format!(r"\b{s}\b"),
            format!(r"new\s+{s}\b"),
            format!(r"extends\s+{s}\b"),
            format!(r"import\s*\{{[^}}]*\b{s}\b"),
        ],
        Dialect::Go => vec![format!(r"\b{s}\b"), format!(r"{s}\s*\{{")],
        Dialect::Unknown => vec![format!(r"\b{s}\b")],
    }
}

/// Test whether `text` appears to use `symbol`, where `symbol` was defined in
/// a file of the given dialect. Patterns are tried in order; the first match
/// wins and no further patterns are tested.
///
/// Symbols below [`MIN_REFERENCE_SYMBOL_LEN`] never match.
pub fn references_symbol(dialect: Dialect, symbol: &str, text: &str) -> bool {
    if symbol.len() < MIN_REFERENCE_SYMBOL_LEN {
        return false;
    }
    for source in usage_pattern_sources(dialect, symbol) {
        let Ok(pattern) = Regex::new(&source) else {
            // Escaped symbols always compile; guard anyway.
            log::debug!("skipping unparsable usage pattern {source:?}");
            continue;
        };
        if pattern.is_match(text) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundary_usage() {
        assert!(references_symbol(
            Dialect::CSharp,
            "Widget",
            "var w = Widget.Parse(input);"
        ));
        assert!(!references_symbol(
            Dialect::CSharp,
            "Widget",
            "var w = WidgetFactory.Create();"
        ));
    }

    #[test]
    fn construction_usage() {
        assert!(references_symbol(
            Dialect::CSharp,
            "Widget",
            "return new Widget(name);"
        ));
    }

    #[test]
    fn python_import_usage() {
        assert!(references_symbol(
            Dialect::Python,
            "Loader",
            "from loaders import Loader"
        ));
    }

    #[test]
    fn short_symbols_never_match() {
        assert!(!references_symbol(Dialect::Python, "db", "db = connect()"));
        assert!(!references_symbol(Dialect::Unknown, "id", "id id id"));
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        // A symbol extracted from malformed text must not inject syntax.
        assert!(!references_symbol(Dialect::Unknown, "a+b", "totally unrelated"));
    }
}
