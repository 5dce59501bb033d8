use crate::dialect::Dialect;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Pattern order mirrors declaration precedence: types first, then callables,
// then bindings. Capture group 1 is always the symbol name.

static CSHARP_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Type declarations
        r"(?:public|private|protected|internal)\s+(?:(?:static|sealed|abstract|partial)\s+)*(?:class|interface|struct|enum)\s+(\w+)",
        // Method signatures
        r"(?:public|private|protected|internal)\s+(?:static\s+)?[\w<>\[\]]+\s+(\w+)\s*\(",
        // Property declarations
        r"(?:public|private|protected|internal)\s+(?:static\s+)?[\w<>\[\]]+\s+(\w+)\s*\{",
    ])
});

static JAVA_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:public|private|protected)\s+(?:(?:static|final|abstract)\s+)*(?:class|interface|enum)\s+(\w+)",
        r"(?:public|private|protected)\s+(?:static\s+)?(?:final\s+)?[\w<>\[\]]+\s+(\w+)\s*\(",
    ])
});

static PYTHON_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Class declarations
        r"\bclass\s+(\w+)",
        // Function declarations
        r"\bdef\s+(\w+)",
        // Module-level bindings
        r"(?m)^(\w+)\s*=",
    ])
});

static RUST_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:struct|enum|trait)\s+(\w+)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?fn\s+(\w+)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(?:const|static)\s+(\w+)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?type\s+(\w+)",
    ])
});

static JAVASCRIPT_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\bclass\s+(\w+)",
        r"\bfunction\s+(\w+)",
        r"(?m)^\s*(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=",
    ])
});

static TYPESCRIPT_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\bclass\s+(\w+)",
        r"\binterface\s+(\w+)",
        r"\benum\s+(\w+)",
        r"\btype\s+(\w+)\s*=",
        r"\bfunction\s+(\w+)",
        r"(?m)^\s*(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=",
    ])
});

static GO_DEFS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?m)^func\s+(?:\([^)]*\)\s*)?(\w+)\s*\(",
        r"(?m)^type\s+(\w+)\b",
        r"(?m)^(?:var|const)\s+(\w+)\b",
    ])
});

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).unwrap_or_else(|e| panic!("invalid definition pattern {src:?}: {e}")))
        .collect()
}

fn definition_patterns(dialect: Dialect) -> &'static [Regex] {
    match dialect {
        Dialect::CSharp => &CSHARP_DEFS,
        Dialect::Java => &JAVA_DEFS,
        Dialect::Python => &PYTHON_DEFS,
        Dialect::Rust => &RUST_DEFS,
        Dialect::JavaScript => &JAVASCRIPT_DEFS,
        Dialect::TypeScript => &TYPESCRIPT_DEFS,
        Dialect::Go => &GO_DEFS,
        Dialect::Unknown => &[],
    }
}

/// Extract the set of symbols (types, functions, top-level bindings) the text
/// defines, using the dialect's lexical patterns.
///
/// Unrecognized dialects yield an empty set.
pub fn defined_symbols(dialect: Dialect, text: &str) -> BTreeSet<String> {
    let mut symbols = BTreeSet::new();
    for pattern in definition_patterns(dialect) {
        for captures in pattern.captures_iter(text) {
            if let Some(name) = captures.get(1) {
                symbols.insert(name.as_str().to_string());
            }
        }
    }
    symbols
}
