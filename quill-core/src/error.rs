/// Top-level quill error type.
///
/// All fallible operations in `quill-core` return [`Result<T, QuillError>`](Result).
/// Each variant wraps a domain-specific error enum, allowing callers to
/// match on the error source without losing type information.
#[derive(thiserror::Error, Debug)]
pub enum QuillError {
    /// Error during function extraction (parsing, query execution).
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Error in configuration parsing or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error during report rendering.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors during the extraction phase.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// Source file could not be parsed by its grammar.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path of the file that failed to parse.
        path: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A grammar or query could not be loaded (version mismatch, bad pattern).
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    /// Filesystem I/O error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in quill configuration parsing and validation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist at the expected path.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// Configuration file syntax could not be parsed (TOML error).
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors while rendering the coverage report.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Filesystem I/O error writing rendered output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, QuillError>`.
pub type Result<T> = std::result::Result<T, QuillError>;
