use std::path::Path;

/// Source dialect, inferred from a file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    CSharp,
    Java,
    Python,
    Rust,
    JavaScript,
    TypeScript,
    Go,
    Unknown,
}

impl Dialect {
    /// Detect dialect from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "cs" => Dialect::CSharp,
            "java" => Dialect::Java,
            "py" | "pyw" => Dialect::Python,
            "rs" => Dialect::Rust,
            "js" | "mjs" | "cjs" | "jsx" => Dialect::JavaScript,
            "ts" | "tsx" => Dialect::TypeScript,
            "go" => Dialect::Go,
            _ => Dialect::Unknown,
        }
    }

    /// Detect dialect from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Dialect::Unknown)
    }

    /// Get dialect name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::CSharp => "csharp",
            Dialect::Java => "java",
            Dialect::Python => "python",
            Dialect::Rust => "rust",
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Go => "go",
            Dialect::Unknown => "unknown",
        }
    }

    /// Check if definition patterns exist for this dialect
    pub fn is_recognized(self) -> bool {
        self != Dialect::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Dialect::from_extension("cs"), Dialect::CSharp);
        assert_eq!(Dialect::from_extension("CS"), Dialect::CSharp);
        assert_eq!(Dialect::from_extension("py"), Dialect::Python);
        assert_eq!(Dialect::from_extension("rs"), Dialect::Rust);
        assert_eq!(Dialect::from_extension("tsx"), Dialect::TypeScript);
        assert_eq!(Dialect::from_extension("bin"), Dialect::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Dialect::from_path("Services/AuthService.cs"), Dialect::CSharp);
        assert_eq!(Dialect::from_path("src/main.py"), Dialect::Python);
        assert_eq!(Dialect::from_path("index.ts"), Dialect::TypeScript);
        assert_eq!(Dialect::from_path("no_extension"), Dialect::Unknown);
    }

    #[test]
    fn test_is_recognized() {
        assert!(Dialect::CSharp.is_recognized());
        assert!(Dialect::Go.is_recognized());
        assert!(!Dialect::Unknown.is_recognized());
    }
}
