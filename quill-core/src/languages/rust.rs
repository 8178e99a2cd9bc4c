//! Rust function patterns.
//!
//! Documentation is a run of line comments (`///`, or `//!` for the rare
//! inner-doc case) directly above a `function_item`; block comments above
//! the item are also offered to the classifier.

pub const FUNCTION_QUERY: &str = r"
((line_comment)+ @doc
  .
  (function_item
    name: (identifier) @name) @function)

((block_comment) @doc
  .
  (function_item
    name: (identifier) @name) @function)

(function_item
  name: (identifier) @name) @function
";
