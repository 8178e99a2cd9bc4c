//! ESTree fallback extraction.
//!
//! When an external provider hands us an ESTree document for an EcmaScript
//! file we never re-parse: functions are lifted straight out of the JSON
//! tree, and documentation is recovered by scanning the raw source lines
//! upward from each function. Only `/** ... */` blocks are recognized on
//! this path; runs of `//` lines above a function are not collected.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::classify::classify;
use crate::languages::Language;
use crate::types::{DocumentedFunction, FunctionRecord, ScanContext};

/// Extracts function records from a pre-parsed ESTree document.
pub fn extract_from_tree(
    root: &Value,
    source: &str,
    path: &Path,
    ctx: &mut ScanContext,
) -> Vec<FunctionRecord> {
    let lines: Vec<&str> = source.lines().collect();
    let mut seen: HashSet<(String, usize)> = HashSet::new();
    let mut records = Vec::new();
    walk(root, &lines, path, ctx, &mut seen, &mut records);
    records
}

fn walk(
    node: &Value,
    lines: &[&str],
    path: &Path,
    ctx: &mut ScanContext,
    seen: &mut HashSet<(String, usize)>,
    records: &mut Vec<FunctionRecord>,
) {
    match node {
        Value::Object(map) => {
            if let Some(name) = function_name(node) {
                if let Some((start_line, end_line)) = node_lines(node) {
                    if seen.insert((name.clone(), start_line)) {
                        records.push(build_record(
                            name, start_line, end_line, lines, path, ctx,
                        ));
                    }
                }
            }
            for value in map.values() {
                walk(value, lines, path, ctx, seen, records);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, lines, path, ctx, seen, records);
            }
        }
        _ => {}
    }
}

/// Returns the display name when `node` is a function-shaped ESTree node.
///
/// Anonymous functions (callbacks, unnamed expressions) yield `None` and
/// produce no record.
fn function_name(node: &Value) -> Option<String> {
    let kind = node.get("type")?.as_str()?;
    match kind {
        "FunctionDeclaration" => identifier_name(node.get("id")?),
        "MethodDefinition" => identifier_name(node.get("key")?),
        "FunctionExpression" => identifier_name(node.get("id")?),
        "VariableDeclarator" => {
            let init_kind = node.get("init")?.get("type")?.as_str()?;
            if init_kind == "FunctionExpression" || init_kind == "ArrowFunctionExpression" {
                identifier_name(node.get("id")?)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn identifier_name(node: &Value) -> Option<String> {
    Some(node.get("name")?.as_str()?.to_string())
}

/// ESTree `loc` lines are one-based; records are zero-based.
fn node_lines(node: &Value) -> Option<(usize, usize)> {
    let loc = node.get("loc")?;
    let start = loc.get("start")?.get("line")?.as_u64()? as usize;
    let end = loc.get("end")?.get("line")?.as_u64()? as usize;
    Some((start.saturating_sub(1), end.saturating_sub(1)))
}

fn build_record(
    name: String,
    start_line: usize,
    end_line: usize,
    lines: &[&str],
    path: &Path,
    ctx: &mut ScanContext,
) -> FunctionRecord {
    let mut is_documented = false;
    let mut cleaned_doc = None;
    if let Some(block) = find_doc_block(lines, start_line) {
        let validation = classify(Some(Language::EcmaScript), &block);
        if validation.is_valid {
            is_documented = true;
            cleaned_doc = validation.cleaned_text;
        }
    }

    if is_documented {
        if let Some(documentation) = cleaned_doc.clone() {
            ctx.record_documented(DocumentedFunction {
                name: name.clone(),
                file_path: path.to_path_buf(),
                documentation,
            });
        }
    }

    let clamped_end = end_line.min(lines.len().saturating_sub(1));
    let source_text = if start_line <= clamped_end && start_line < lines.len() {
        lines[start_line..=clamped_end].join("\n")
    } else {
        String::new()
    };

    FunctionRecord {
        name,
        file_path: path.to_path_buf(),
        start_line,
        end_line,
        source_text,
        is_documented,
        cleaned_doc,
    }
}

enum ScanState {
    BeforeComment,
    InsideComment,
}

/// Scans upward from the line above `start_line` for a `/** ... */` block,
/// returning its raw text in source order.
fn find_doc_block(lines: &[&str], start_line: usize) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut state = ScanState::BeforeComment;

    for line in lines[..start_line.min(lines.len())].iter().rev() {
        let trimmed = line.trim();
        match state {
            ScanState::BeforeComment => {
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.starts_with("/**") {
                    // Single-line block directly above the function.
                    collected.push(line);
                    break;
                }
                // A closing line must itself be comment-shaped; a code line
                // with a trailing `/* note */` is not a block closer.
                if trimmed.ends_with("*/")
                    && (trimmed.starts_with('*') || trimmed.starts_with("/*"))
                {
                    collected.push(line);
                    state = ScanState::InsideComment;
                    continue;
                }
                // Nearest non-blank line is not a block comment; no doc.
                return None;
            }
            ScanState::InsideComment => {
                if trimmed.starts_with("/**") {
                    collected.push(line);
                    break;
                }
                // Anything that is not a comment continuation means the
                // closer we saw belonged to some other comment; no doc.
                if !(trimmed.starts_with('*') || trimmed.starts_with("/*")) {
                    return None;
                }
                collected.push(line);
            }
        }
    }

    if collected.is_empty() {
        return None;
    }
    collected.reverse();
    Some(collected.join("\n"))
}
