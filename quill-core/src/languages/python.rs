//! Python function patterns.
//!
//! Python documentation lives *inside* the function: the first statement of
//! the body, when it is a standalone string literal, is the docstring. A
//! preceding comment is never consulted here — the docstring pattern is the
//! only doc-bearing shape.

pub const FUNCTION_QUERY: &str = r"
(function_definition
  name: (identifier) @name
  body: (block
    .
    (expression_statement (string) @doc))) @function

(function_definition
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
            Path::new("/project/lib/util.py"),
            Language::Python,
            &mut ctx,
        )
        .unwrap();
        (records, ctx)
    }

    #[test]
    fn docstring_counts_without_any_preceding_comment() {
        let source = "def total(xs):\n    \"\"\"Returns the sum of xs.\"\"\"\n    return sum(xs)\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_documented);
        assert_eq!(
            records[0].cleaned_doc.as_deref(),
            Some("\"\"\"Returns the sum of xs.\"\"\"")
        );
        assert_eq!(ctx.documented().len(), 1);
    }

    #[test]
    fn non_string_first_statement_is_undocumented() {
        let source = "def total(xs):\n    acc = 0\n    return acc\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_documented);
        assert!(ctx.documented().is_empty());
    }

    #[test]
    fn methods_use_the_same_docstring_rule() {
        let source = "class Counter:\n    def bump(self):\n        '''Increment by one.'''\n        self.n += 1\n\n    def peek(self):\n        return self.n\n";
        let (records, _ctx) = run(source);
        assert_eq!(records.len(), 2);
        let bump = records.iter().find(|r| r.name == "bump").unwrap();
        assert!(bump.is_documented);
        let peek = records.iter().find(|r| r.name == "peek").unwrap();
        assert!(!peek.is_documented);
    }

    #[test]
    fn overlapping_sub_patterns_yield_one_record() {
        // The docstring pattern and the generic pattern both match; dedup by
        // (name, start line) must keep exactly one, the documented variant.
        let source = "def solo():\n    \"\"\"Doc.\"\"\"\n    pass\n";
        let (records, ctx) = run(source);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_documented);
        assert_eq!(ctx.documented().len(), 1);
    }
}
