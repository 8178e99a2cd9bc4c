//! Catalog-driven extraction: parse a file with its grammar, run the
//! language's function-pattern query, and pair each function with its best
//! candidate doc comment.

use std::collections::HashSet;
use std::path::Path;

use streaming_iterator::StreamingIterator;
use tracing::debug;
use tree_sitter::{Parser, Query, QueryCursor};

use crate::classify::classify;
use crate::error::{ExtractError, QuillError, Result};
use crate::languages::Language;
use crate::types::{DocumentedFunction, FunctionRecord, ScanContext};

/// One query match, lifted out of the cursor so matches can be ordered and
/// deduplicated without holding tree borrows.
struct Candidate {
    start_byte: usize,
    pattern_index: usize,
    name: String,
    start_line: usize,
    end_line: usize,
    doc_nodes: Vec<DocCapture>,
}

/// A `@doc` capture with enough position to check adjacency later. Blank
/// lines produce no nodes, so the query's sibling anchor alone cannot tell
/// `// doc\nfn f()` apart from `// doc\n\n\nfn f()` — rows can.
struct DocCapture {
    start_row: usize,
    end_row: usize,
    start_byte: usize,
    text: String,
}

/// Extract all function records from `source`.
///
/// A file whose text the grammar cannot parse cleanly is a recoverable
/// per-file failure: the caller logs it and moves on, and this file
/// contributes zero records.
pub fn extract(
    source: &str,
    path: &Path,
    language: Language,
    ctx: &mut ScanContext,
) -> Result<Vec<FunctionRecord>> {
    let grammar = language.grammar();

    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| QuillError::Extract(ExtractError::TreeSitter(e.to_string())))?;

    let tree = parser.parse(source, None).ok_or_else(|| {
        QuillError::Extract(ExtractError::Parse {
            path: path.display().to_string(),
            message: "parser produced no tree".to_string(),
        })
    })?;
    if tree.root_node().has_error() {
        return Err(QuillError::Extract(ExtractError::Parse {
            path: path.display().to_string(),
            message: "source contains syntax errors".to_string(),
        }));
    }

    let query = Query::new(&grammar, language.function_query()).map_err(|e| {
        QuillError::Extract(ExtractError::TreeSitter(format!(
            "{} function query: {e}",
            language.id()
        )))
    })?;

    let function_idx = query.capture_index_for_name("function");
    let name_idx = query.capture_index_for_name("name");
    let doc_idx = query.capture_index_for_name("doc");

    let mut candidates = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        let mut function_node = None;
        let mut name_node = None;
        let mut doc_nodes = Vec::new();
        for capture in m.captures {
            let idx = Some(capture.index);
            if idx == function_idx {
                function_node = Some(capture.node);
            } else if idx == name_idx {
                name_node = Some(capture.node);
            } else if idx == doc_idx {
                doc_nodes.push(DocCapture {
                    start_row: capture.node.start_position().row,
                    end_row: capture.node.end_position().row,
                    start_byte: capture.node.start_byte(),
                    text: source[capture.node.byte_range()].to_string(),
                });
            }
        }

        // A match missing its function or name capture is malformed:
        // discarded silently, not counted, not reported.
        let (Some(function_node), Some(name_node)) = (function_node, name_node) else {
            continue;
        };
        let name = source[name_node.byte_range()].to_string();
        if name.is_empty() {
            continue;
        }

        candidates.push(Candidate {
            start_byte: function_node.start_byte(),
            pattern_index: m.pattern_index,
            name,
            start_line: function_node.start_position().row,
            end_line: function_node.end_position().row,
            doc_nodes,
        });
    }

    // Stable order: position first, then pattern index, so the doc-bearing
    // sub-pattern for a node always precedes its generic twin. Dedup then
    // keeps the first occurrence per (name, start line).
    candidates.sort_by_key(|c| (c.start_byte, c.pattern_index));

    let lines: Vec<&str> = source.lines().collect();
    let mut seen: HashSet<(String, usize)> = HashSet::new();
    let mut records = Vec::new();

    for candidate in candidates {
        if !seen.insert((candidate.name.clone(), candidate.start_line)) {
            continue;
        }

        let mut is_documented = false;
        let mut cleaned_doc = None;
        for text in adjacent_doc_texts(&candidate) {
            let validation = classify(Some(language), text);
            if validation.is_valid {
                is_documented = true;
                cleaned_doc = validation.cleaned_text;
                break;
            }
        }

        if is_documented {
            if let Some(documentation) = cleaned_doc.clone() {
                ctx.record_documented(DocumentedFunction {
                    name: candidate.name.clone(),
                    file_path: path.to_path_buf(),
                    documentation,
                });
            }
        }

        let end_line = candidate.end_line.min(lines.len().saturating_sub(1));
        let source_text = lines[candidate.start_line..=end_line].join("\n");

        records.push(FunctionRecord {
            name: candidate.name,
            file_path: path.to_path_buf(),
            start_line: candidate.start_line,
            end_line: candidate.end_line,
            source_text,
            is_documented,
            cleaned_doc,
        });
    }

    debug!(
        path = %path.display(),
        language = language.id(),
        functions = records.len(),
        "Extracted function records"
    );
    Ok(records)
}

/// Doc candidates that actually touch the declaration, in source order:
/// nodes inside the function body (docstrings), then the run of preceding
/// comments whose rows butt up against the declaration's first line. A
/// comment separated from the declaration (or from the rest of the run) by
/// a blank line is dropped here.
fn adjacent_doc_texts(candidate: &Candidate) -> Vec<&str> {
    let mut texts: Vec<&str> = candidate
        .doc_nodes
        .iter()
        .filter(|d| d.start_byte > candidate.start_byte)
        .map(|d| d.text.as_str())
        .collect();

    let mut run: Vec<&DocCapture> = Vec::new();
    let mut expected_row = candidate.start_line;
    for node in candidate.doc_nodes.iter().rev() {
        if node.start_byte > candidate.start_byte {
            continue;
        }
        if node.end_row + 1 != expected_row {
            break;
        }
        run.push(node);
        expected_row = node.start_row;
    }
    texts.extend(run.iter().rev().map(|d| d.text.as_str()));
    texts
}
