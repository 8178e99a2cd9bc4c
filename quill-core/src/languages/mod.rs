pub mod ecma;
pub mod go;
pub mod java;
pub mod python;
pub mod rust;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Closed set of supported languages.
///
/// Exactly five tags: the EcmaScript family is one bucket covering both
/// JavaScript and TypeScript (they share a grammar family, and every
/// per-language rule in this crate treats them identically).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    EcmaScript,
    Python,
    Rust,
    Go,
    Java,
}

impl Language {
    /// Resolve a language from a file path by its extension.
    ///
    /// Lookup is case-sensitive with no side effects; an unknown extension
    /// yields `None`, which callers treat as "skip this file".
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Some(Self::EcmaScript),
            "py" | "pyi" => Some(Self::Python),
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Lowercase identifier for logging and report output.
    pub fn id(self) -> &'static str {
        match self {
            Self::EcmaScript => "ecmascript",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Java => "java",
        }
    }

    /// Tree-sitter grammar for parsing.
    ///
    /// The EcmaScript bucket uses the TSX grammar, a superset that parses
    /// both siblings (plain JavaScript and JSX included).
    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::EcmaScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// The hand-authored function-pattern query for this language.
    ///
    /// Each query captures `@function` (the declaration node), `@name`
    /// (its identifier) and zero or more `@doc` candidates. The shapes are
    /// genuinely heterogeneous across grammars, so there is one exhaustive
    /// table entry per language rather than a unifying abstraction.
    pub fn function_query(self) -> &'static str {
        match self {
            Self::EcmaScript => ecma::FUNCTION_QUERY,
            Self::Python => python::FUNCTION_QUERY,
            Self::Rust => rust::FUNCTION_QUERY,
            Self::Go => go::FUNCTION_QUERY,
            Self::Java => java::FUNCTION_QUERY,
        }
    }

    /// All supported languages, in report order.
    pub fn all() -> [Self; 5] {
        [
            Self::EcmaScript,
            Self::Python,
            Self::Rust,
            Self::Go,
            Self::Java,
        ]
    }
}
