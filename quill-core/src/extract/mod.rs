//! Scan orchestration.
//!
//! The scanner routes each file to an extraction engine by language. Grammar
//! languages go through the tree-sitter engine; EcmaScript files can instead
//! be served by an external syntax-tree provider when one is installed. Every
//! failure is scoped to its file: one unparsable source never aborts a scan.

pub mod engine;
pub mod estree;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::QuillError;
use crate::languages::Language;
use crate::types::{FileScan, ScanContext, ScanOutcome};

/// Source of pre-parsed EcmaScript syntax trees.
///
/// Lint pipelines already hold an ESTree-shaped document for every file they
/// touch; implementing this trait lets the scanner reuse those trees instead
/// of parsing twice. Returning `None` falls back to the grammar engine.
pub trait EstreeProvider {
    fn tree_for(&self, path: &Path, source: &str) -> Option<serde_json::Value>;
}

/// Walks a list of files and extracts function records from each.
pub struct Scanner {
    root: PathBuf,
    estree: Option<Box<dyn EstreeProvider>>,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            estree: None,
        }
    }

    /// Installs an external EcmaScript tree provider.
    pub fn with_estree_provider(mut self, provider: Box<dyn EstreeProvider>) -> Self {
        self.estree = Some(provider);
        self
    }

    /// Scans every path, collecting per-file results and per-file errors.
    pub fn scan_files(&self, paths: &[PathBuf], ctx: &mut ScanContext) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        for path in paths {
            let Some(language) = Language::from_path(path) else {
                continue;
            };
            match self.scan_file(path, language, ctx) {
                Ok(scan) => outcome.files.push(scan),
                Err(e) => {
                    let shown = self.display_path(path);
                    warn!(path = %shown, error = %e, "Skipping file");
                    outcome.errors.push((shown, e));
                }
            }
        }
        info!(
            files = outcome.files.len(),
            functions = outcome.total_functions(),
            documented = outcome.total_documented(),
            errors = outcome.errors.len(),
            "Scan complete"
        );
        outcome
    }

    fn scan_file(
        &self,
        path: &Path,
        language: Language,
        ctx: &mut ScanContext,
    ) -> crate::error::Result<FileScan> {
        let source = fs::read_to_string(path)
            .map_err(|e| QuillError::Extract(crate::error::ExtractError::Io(e)))?;

        let records = if language == Language::EcmaScript {
            match self
                .estree
                .as_ref()
                .and_then(|p| p.tree_for(path, &source))
            {
                Some(tree) => estree::extract_from_tree(&tree, &source, path, ctx),
                None => engine::extract(&source, path, language, ctx)?,
            }
        } else {
            engine::extract(&source, path, language, ctx)?
        };

        Ok(FileScan {
            path: path.to_path_buf(),
            language,
            records,
        })
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
