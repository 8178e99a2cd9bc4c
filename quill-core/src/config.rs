use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, QuillError};

/// Top-level configuration, matching `quill.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            include_patterns: vec![
                "**/*.rs".into(),
                "**/*.py".into(),
                "**/*.pyi".into(),
                "**/*.ts".into(),
                "**/*.tsx".into(),
                "**/*.js".into(),
                "**/*.jsx".into(),
                "**/*.mjs".into(),
                "**/*.cjs".into(),
                "**/*.go".into(),
                "**/*.java".into(),
            ],
            exclude_patterns: vec![
                "**/node_modules/**".into(),
                "**/vendor/**".into(),
                "**/target/**".into(),
                "**/.git/**".into(),
                "**/dist/**".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Include the full source text of undocumented functions in the report.
    pub show_source: bool,
    /// Cap on listed undocumented functions per file; 0 means unlimited.
    pub max_undocumented_per_file: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            show_source: false,
            max_undocumented_per_file: 0,
        }
    }
}

impl QuillConfig {
    /// Loads configuration from `quill.toml` under `root`, falling back to
    /// defaults when the file does not exist.
    pub fn load(root: &Path) -> crate::error::Result<Self> {
        let path = root.join("quill.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            QuillError::Config(ConfigError::NotFound(path.display().to_string()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| QuillError::Config(ConfigError::Parse(e.to_string())))?;
        Ok(config)
    }
}
