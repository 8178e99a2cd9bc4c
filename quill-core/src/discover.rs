//! File discovery — glob-based include/exclude walking of a project tree.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::ScanSection;

/// Collects the candidate source files under `root`, honoring the configured
/// include and exclude patterns. Results are sorted and deduplicated so scan
/// output is stable across runs.
pub fn discover_files(root: &Path, scan: &ScanSection) -> Vec<PathBuf> {
    let mut matched = Vec::new();

    for pattern in &scan.include_patterns {
        let full_pattern = root.join(pattern).to_string_lossy().to_string();
        match glob::glob(&full_pattern) {
            Ok(paths) => {
                for entry in paths.flatten() {
                    if entry.is_file() && !is_excluded(&entry, root, &scan.exclude_patterns) {
                        matched.push(entry);
                    }
                }
            }
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Invalid glob pattern");
            }
        }
    }

    matched.sort();
    matched.dedup();

    info!(files = matched.len(), root = %root.display(), "Discovery complete");
    matched
}

fn is_excluded(path: &Path, root: &Path, exclude_patterns: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let rel_str = relative.to_string_lossy();

    for pattern in exclude_patterns {
        let normalized = pattern.replace("**", "");
        let normalized = normalized.trim_matches('/');
        if rel_str.contains(normalized) {
            return true;
        }
    }
    false
}
