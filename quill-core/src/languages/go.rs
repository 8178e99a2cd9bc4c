//! Go function patterns.
//!
//! Godoc convention: a contiguous run of line comments directly above the
//! `func` declaration. The classifier rejects bare `//` markers and TODO
//! placeholders, so a captured comment is not automatically documentation.

pub const FUNCTION_QUERY: &str = r"
((comment)+ @doc
  .
  (function_declaration
    name: (identifier) @name) @function)

((comment)+ @doc
  .
  (method_declaration
    name: (field_identifier) @name) @function)

(function_declaration
  name: (identifier) @name) @function

(method_declaration
  name: (field_identifier) @name) @function
";
