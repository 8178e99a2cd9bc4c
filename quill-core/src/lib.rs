//! Quill core library — grammar-backed function extraction and
//! documentation-coverage scanning.
//!
//! The main entry point is [`extract::Scanner`], which walks discovered
//! source files, extracts function records per language, and classifies the
//! documentation attached to each.

pub mod classify;
pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod languages;
pub mod render;
pub mod types;

pub use error::{QuillError, Result};
pub use languages::Language;
pub use types::{DocumentedFunction, FunctionRecord, ScanContext, ScanOutcome};
