//! Java function patterns.
//!
//! Methods and constructors inside a type body, documented by a block
//! comment directly above the declaration. Line comments are not offered as
//! candidates — the Javadoc convention is block-shaped.

pub const FUNCTION_QUERY: &str = r"
((block_comment) @doc
  .
  (method_declaration
    name: (identifier) @name) @function)

((block_comment) @doc
  .
  (constructor_declaration
    name: (identifier) @name) @function)

(method_declaration
  name: (identifier) @name) @function

(constructor_declaration
  name: (identifier) @name) @function
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
            Path::new("/project/src/App.java"),
            Language::Java,
            &mut ctx,
        )
        .unwrap();
        (records, ctx)
    }

    #[test]
    fn javadoc_marks_method_documented() {
        let source = "class Calc {\n    /** Adds two numbers. */\n    int add(int a, int b) {\n        return a + b;\n    }\n}\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "add");
        assert_eq!(records[0].start_line, 2);
        assert!(records[0].is_documented);
        assert_eq!(ctx.documented().len(), 1);
    }

    #[test]
    fn constructors_are_extracted() {
        let source = "class Calc {\n    /** Builds a calculator. */\n    Calc() {\n    }\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Calc");
        assert!(records[0].is_documented);
    }

    #[test]
    fn blank_line_detaches_javadoc_block() {
        let source =
            "class Calc {\n    /** Orphaned. */\n\n    void reset() {\n    }\n}\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
        assert!(ctx.documented().is_empty());
    }

    #[test]
    fn plain_block_comment_also_qualifies() {
        let source = "class Calc {\n    /* not javadoc, still accepted */\n    void reset() {\n    }\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_documented);
    }

    #[test]
    fn line_comment_is_not_a_candidate_here() {
        let source = "class Calc {\n    // line comments are not javadoc candidates\n    void reset() {\n    }\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
    }

    #[test]
    fn undocumented_method_yields_a_record() {
        let source = "class Calc {\n    int sub(int a, int b) {\n        return a - b;\n    }\n}\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
    }
}
