use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::languages::Language;

/// One discovered function, method, or constructor.
///
/// Line numbers are zero-based and inclusive, and span the declaration
/// itself — never any documentation comment above it. Downstream insertion
/// relies on that: new documentation goes immediately before `start_line`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Identifier text; anonymous functions are excluded by policy, so this
    /// is never empty.
    pub name: String,
    /// Absolute path of the owning file.
    pub file_path: PathBuf,
    /// First line of the declaration (zero-based).
    pub start_line: usize,
    /// Last line of the declaration (zero-based, inclusive).
    pub end_line: usize,
    /// Exact source substring spanning `start_line..=end_line`.
    pub source_text: String,
    /// Whether a qualifying documentation comment was found.
    pub is_documented: bool,
    /// Trimmed documentation text; present iff `is_documented`.
    pub cleaned_doc: Option<String>,
}

/// Cross-file accumulation record for functions that already carry
/// documentation. Appended to the [`ScanContext`] the moment a function is
/// classified documented, regardless of which engine found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedFunction {
    pub name: String,
    pub file_path: PathBuf,
    pub documentation: String,
}

/// Transient result of doc-comment classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocValidation {
    pub is_valid: bool,
    pub cleaned_text: Option<String>,
}

impl DocValidation {
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            cleaned_text: None,
        }
    }

    pub fn valid(cleaned: String) -> Self {
        Self {
            is_valid: true,
            cleaned_text: Some(cleaned),
        }
    }
}

/// Lifetime-scoped state for one full multi-file scan.
///
/// Created at the start of a scan and passed by mutable reference through
/// every extraction call — there is no ambient global collection, so tests
/// can construct isolated contexts. Appends are ordered first-seen-first;
/// callers that parallelize file scanning must serialize access.
#[derive(Debug, Default)]
pub struct ScanContext {
    documented: Vec<DocumentedFunction>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a function was found already documented.
    pub fn record_documented(&mut self, entry: DocumentedFunction) {
        self.documented.push(entry);
    }

    /// All documented functions seen so far, in append order.
    pub fn documented(&self) -> &[DocumentedFunction] {
        &self.documented
    }
}

/// Extraction results for a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileScan {
    pub path: PathBuf,
    pub language: Language,
    pub records: Vec<FunctionRecord>,
}

impl FileScan {
    /// Count of records that already carry documentation.
    pub fn documented_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_documented).count()
    }
}

/// Aggregate result of scanning a file list. Per-file failures are collected
/// here rather than aborting the scan.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Per-file results, in discovery order. Files whose extension matched
    /// no language are absent entirely.
    pub files: Vec<FileScan>,
    /// Failed files: relative path and the underlying error.
    pub errors: Vec<(String, crate::error::QuillError)>,
}

impl ScanOutcome {
    /// Total functions found across all files.
    pub fn total_functions(&self) -> usize {
        self.files.iter().map(|f| f.records.len()).sum()
    }

    /// Total functions already documented.
    pub fn total_documented(&self) -> usize {
        self.files.iter().map(FileScan::documented_count).sum()
    }
}
