//! EcmaScript-family function patterns (JavaScript and TypeScript).
//!
//! Documentation is one or more comments directly above the declaration,
//! reached through an `export` wrapper when present. Named bindings whose
//! initializer is a function or arrow literal count as functions; anonymous
//! literals never do.

/// Doc-bearing sub-patterns come first so they win the engine's
/// first-match-wins dedup against their generic twins below.
pub const FUNCTION_QUERY: &str = r"
((comment)+ @doc
  .
  (function_declaration
    name: (identifier) @name) @function)

((comment)+ @doc
  .
  (export_statement
    declaration: (function_declaration
      name: (identifier) @name) @function))

((comment)+ @doc
  .
  (method_definition
    name: (property_identifier) @name) @function)

((comment)+ @doc
  .
  [
    (lexical_declaration
      (variable_declarator
        name: (identifier) @name
        value: [
          (arrow_function)
          (function_expression)
        ]))
    (variable_declaration
      (variable_declarator
        name: (identifier) @name
        value: [
          (arrow_function)
          (function_expression)
        ]))
  ] @function)

((comment)+ @doc
  .
  (export_statement
    declaration: (lexical_declaration
      (variable_declarator
        name: (identifier) @name
        value: [
          (arrow_function)
          (function_expression)
        ])) @function))

(function_declaration
  name: (identifier) @name) @function

(method_definition
  name: (property_identifier) @name) @function

(lexical_declaration
  (variable_declarator
    name: (identifier) @name
    value: [
      (arrow_function)
      (function_expression)
    ])) @function

(variable_declaration
  (variable_declarator
    name: (identifier) @name
    value: [
      (arrow_function)
      (function_expression)
    ])) @function
";

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::extract::engine::extract;
    use crate::languages::Language;
    use crate::types::ScanContext;

    fn run(source: &str) -> (Vec<crate::types::FunctionRecord>, ScanContext) {
        let mut ctx = ScanContext::new();
        let records = extract(
            source,
            Path::new("/project/src/app.ts"),
            Language::EcmaScript,
            &mut ctx,
        )
        .unwrap();
        (records, ctx)
    }

    #[test]
    fn jsdoc_block_marks_function_documented() {
        let source = "/** Adds two numbers. */\nfunction add(a, b) {\n  return a + b;\n}\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.name, "add");
        assert_eq!(rec.start_line, 1);
        assert_eq!(rec.end_line, 3);
        assert!(rec.is_documented);
        assert_eq!(rec.cleaned_doc.as_deref(), Some("/** Adds two numbers. */"));
        assert_eq!(ctx.documented().len(), 1);
    }

    #[test]
    fn line_comment_is_captured_but_rejected() {
        let source = "// Adds two numbers.\nfunction add(a, b) { return a + b; }\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
        assert!(records[0].cleaned_doc.is_none());
    }

    #[test]
    fn blank_line_detaches_jsdoc_block() {
        let source = "/** Orphaned. */\n\nfunction below() {}\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
        assert!(ctx.documented().is_empty());
    }

    #[test]
    fn exported_function_collapses_to_one_record() {
        let source = "/** Greets. */\nexport function greet(name) { return `hi ${name}`; }\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "greet");
        assert!(records[0].is_documented);
        assert_eq!(ctx.documented().len(), 1);
    }

    #[test]
    fn arrow_bound_to_const_is_a_function() {
        let source = "/** Doubles. */\nconst twice = (x) => x * 2;\n\nconst untouched = (y) => y;\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 2);
        let twice = records.iter().find(|r| r.name == "twice").unwrap();
        assert!(twice.is_documented);
        let untouched = records.iter().find(|r| r.name == "untouched").unwrap();
        assert!(!untouched.is_documented);
    }

    #[test]
    fn class_methods_are_extracted() {
        let source = "class Calc {\n  /** Sums. */\n  sum(a, b) {\n    return a + b;\n  }\n\n  reset() {}\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 2);
        let sum = records.iter().find(|r| r.name == "sum").unwrap();
        assert!(sum.is_documented);
        assert_eq!(sum.start_line, 2);
        let reset = records.iter().find(|r| r.name == "reset").unwrap();
        assert!(!reset.is_documented);
    }

    #[test]
    fn anonymous_callback_produces_no_record() {
        let source = "items.forEach(function (x) { console.log(x); });\n";
        let (records, _ctx) = run(source);
        assert!(records.is_empty());
    }

    #[test]
    fn source_text_is_the_exact_line_span() {
        let source = "function one() {\n  return 1;\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records[0].source_text, "function one() {\n  return 1;\n}");
    }
}
