// Report renderer — produces a markdown coverage summary of a scan.
//
// Sections: totals, per-file coverage table, undocumented function list,
// and the documented hand-off collected by the scan context.

#![allow(clippy::cast_precision_loss)]

use std::fmt::Write as _;

use tracing::info;

use crate::config::ReportSection;
use crate::types::{ScanContext, ScanOutcome};

/// Renders a scan outcome as a markdown report.
pub fn render_markdown(outcome: &ScanOutcome, ctx: &ScanContext, report: &ReportSection) -> String {
    let mut out = String::new();

    let total = outcome.total_functions();
    let documented = outcome.total_documented();
    let coverage = if total == 0 {
        100.0
    } else {
        documented as f64 / total as f64 * 100.0
    };

    let _ = writeln!(out, "# Documentation Coverage");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Files scanned: {}", outcome.files.len());
    let _ = writeln!(out, "- Functions: {total}");
    let _ = writeln!(out, "- Documented: {documented} ({coverage:.1}%)");
    if !outcome.errors.is_empty() {
        let _ = writeln!(out, "- Files skipped: {}", outcome.errors.len());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "## Per-file coverage");
    let _ = writeln!(out);
    let _ = writeln!(out, "| File | Functions | Documented |");
    let _ = writeln!(out, "|------|-----------|------------|");
    for file in &outcome.files {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            file.path.display(),
            file.records.len(),
            file.documented_count()
        );
    }

    let undocumented: Vec<_> = outcome
        .files
        .iter()
        .flat_map(|file| file.records.iter().filter(|r| !r.is_documented))
        .collect();
    if !undocumented.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Undocumented functions");
        let _ = writeln!(out);
        let mut shown_for_file = (None, 0usize);
        for record in undocumented {
            if shown_for_file.0 != Some(&record.file_path) {
                shown_for_file = (Some(&record.file_path), 0);
            }
            shown_for_file.1 += 1;
            if report.max_undocumented_per_file > 0
                && shown_for_file.1 > report.max_undocumented_per_file
            {
                continue;
            }
            let _ = writeln!(
                out,
                "- `{}` ({}:{})",
                record.name,
                record.file_path.display(),
                record.start_line + 1
            );
            if report.show_source {
                let _ = writeln!(out);
                let _ = writeln!(out, "  ```");
                for line in record.source_text.lines() {
                    let _ = writeln!(out, "  {line}");
                }
                let _ = writeln!(out, "  ```");
            }
        }
    }

    if !ctx.documented().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Documented functions");
        let _ = writeln!(out);
        for entry in ctx.documented() {
            let _ = writeln!(out, "- `{}` ({})", entry.name, entry.file_path.display());
        }
    }

    if !outcome.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Skipped files");
        let _ = writeln!(out);
        for (path, error) in &outcome.errors {
            let _ = writeln!(out, "- {path}: {error}");
        }
    }

    info!(bytes = out.len(), "Report rendered");
    out
}
