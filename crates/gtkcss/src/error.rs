//! Error types for GTK CSS parsing and translation.
//!
//! The grammar has exactly one failure mode: the input does not match at
//! some position. [`GtkCssError`] reports where that happened so the user can
//! find the offending construct.

use thiserror::Error;

/// Errors that can occur while translating a GTK stylesheet.
///
/// # Examples
///
/// ```rust
/// use gtkcss::{GtkCssError, translate};
///
/// // `@define-color` without its terminating semicolon
/// let result = translate("@define-color accent #336699");
/// assert!(matches!(result, Err(GtkCssError::UnexpectedEof { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtkCssError {
    /// The grammar could not match the input at the given position.
    ///
    /// `line` and `column` are 1-based; `snippet` is the start of the text
    /// that failed to match.
    #[error("CSS syntax error at line {line}, column {column}: unexpected `{snippet}`")]
    InvalidSyntax {
        line: usize,
        column: usize,
        snippet: String,
    },

    /// The input ended in the middle of a construct.
    #[error("unexpected end of input: {expected}")]
    UnexpectedEof { expected: String },
}

impl GtkCssError {
    /// Builds a syntax error for the failure at `rest`, a suffix of `source`.
    pub(crate) fn at(source: &str, rest: &str) -> Self {
        let offset = source.len().saturating_sub(rest.len());
        if rest.trim().is_empty() {
            return Self::UnexpectedEof {
                expected: format!("input ended after {} bytes", offset),
            };
        }

        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(idx) => consumed[idx + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        let snippet: String = rest
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(32)
            .collect();

        Self::InvalidSyntax {
            line,
            column,
            snippet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        let source = "a {\n  b: ;\n}";
        let err = GtkCssError::at(source, &source[9..]);
        assert_eq!(
            err,
            GtkCssError::InvalidSyntax {
                line: 2,
                column: 6,
                snippet: ";".to_string(),
            }
        );
    }

    #[test]
    fn trailing_whitespace_is_eof() {
        let source = "@define-color a #fff   ";
        let err = GtkCssError::at(source, &source[20..]);
        assert!(matches!(err, GtkCssError::UnexpectedEof { .. }));
    }
}
