//! Doc-comment classification.
//!
//! Decides whether raw comment text counts as documentation for a given
//! language. The check is purely syntactic — surface shape only, never
//! content quality — and total: every input yields a definite answer.

use crate::languages::Language;
use crate::types::DocValidation;

/// Classify raw comment text as documentation for `language`.
///
/// Returns invalid immediately when the language is unset or the text is
/// empty. On acceptance, `cleaned_text` is the trimmed original — no
/// reformatting happens here.
pub fn classify(language: Option<Language>, text: &str) -> DocValidation {
    let Some(language) = language else {
        return DocValidation::invalid();
    };
    if text.is_empty() {
        return DocValidation::invalid();
    }

    let trimmed = text.trim();
    let accepted = match language {
        // Block comments only, doc-style or plain. Line comments are not
        // documentation in this family.
        Language::EcmaScript => trimmed.starts_with("/*") && trimmed.ends_with("*/"),

        // Javadoc, plain block, or line comment all qualify.
        Language::Java => {
            trimmed.starts_with("/**") || trimmed.starts_with("/*") || trimmed.starts_with("//")
        }

        // Docstrings (triple-quoted, either flavor) or leading hash comments.
        Language::Python => {
            text.contains("\"\"\"") || text.contains("'''") || trimmed.starts_with('#')
        }

        // Doc lines, module docs, or a block comment pair anywhere in the raw
        // text (a run of `///` lines arrives as one candidate each).
        Language::Rust => {
            text.contains("///")
                || text.contains("//!")
                || (text.contains("/*") && text.contains("*/"))
        }

        // Godoc is stricter: a bare `//` or a TODO placeholder is not real
        // documentation. Deliberate product decision, keep it.
        Language::Go => {
            trimmed.starts_with("//")
                && !trimmed.contains("TODO")
                && trimmed.len() > 2
                && !trimmed[2..].trim().is_empty()
        }
    };

    if accepted {
        DocValidation::valid(trimmed.to_string())
    } else {
        DocValidation::invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_language_or_empty_text_is_invalid() {
        assert!(!classify(None, "/** docs */").is_valid);
        assert!(!classify(Some(Language::Rust), "").is_valid);
    }

    #[test]
    fn classification_is_pure() {
        let first = classify(Some(Language::Go), "// Reads the index.");
        let second = classify(Some(Language::Go), "// Reads the index.");
        assert_eq!(first, second);
    }

    #[test]
    fn ecma_accepts_block_comments_only() {
        let block = classify(Some(Language::EcmaScript), "/** Adds two numbers. */");
        assert!(block.is_valid);
        assert_eq!(
            block.cleaned_text.as_deref(),
            Some("/** Adds two numbers. */")
        );

        assert!(!classify(Some(Language::EcmaScript), "// Adds two numbers.").is_valid);
        // Unterminated block is rejected too.
        assert!(!classify(Some(Language::EcmaScript), "/* Adds two").is_valid);
    }

    #[test]
    fn java_accepts_all_three_comment_shapes() {
        assert!(classify(Some(Language::Java), "/** Javadoc. */").is_valid);
        assert!(classify(Some(Language::Java), "/* plain block */").is_valid);
        assert!(classify(Some(Language::Java), "// line comment").is_valid);
        assert!(!classify(Some(Language::Java), "not a comment").is_valid);
    }

    #[test]
    fn python_accepts_docstrings_and_hash_comments() {
        assert!(classify(Some(Language::Python), "\"\"\"Returns the total.\"\"\"").is_valid);
        assert!(classify(Some(Language::Python), "'''single-quoted docstring'''").is_valid);
        assert!(classify(Some(Language::Python), "# a comment").is_valid);
        assert!(!classify(Some(Language::Python), "x = 1").is_valid);
    }

    #[test]
    fn rust_accepts_doc_markers() {
        assert!(classify(Some(Language::Rust), "/// Parses the header.").is_valid);
        assert!(classify(Some(Language::Rust), "//! Module docs.").is_valid);
        assert!(classify(Some(Language::Rust), "/* block */").is_valid);
        assert!(!classify(Some(Language::Rust), "// plain comment").is_valid);
    }

    #[test]
    fn go_rejects_todos_and_bare_markers() {
        assert!(!classify(Some(Language::Go), "// TODO: fix this").is_valid);
        assert!(!classify(Some(Language::Go), "//").is_valid);
        assert!(!classify(Some(Language::Go), "//   ").is_valid);

        let good = classify(Some(Language::Go), "// Computes the sum of two integers.");
        assert!(good.is_valid);
        assert_eq!(
            good.cleaned_text.as_deref(),
            Some("// Computes the sum of two integers.")
        );
    }

    #[test]
    fn cleaning_trims_but_never_reformats() {
        let v = classify(Some(Language::EcmaScript), "  /* spaced */  ");
        assert_eq!(v.cleaned_text.as_deref(), Some("/* spaced */"));
    }
}
