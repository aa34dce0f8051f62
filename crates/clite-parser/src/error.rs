//! Syntax errors.

use clite_common::Span;
use clite_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use clite_lexer::{LexError, Token};
use thiserror::Error;

/// Result type of every grammar method.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// A syntax error: what the parser expected and the token it saw instead.
///
/// The first error aborts the parse. Lexical errors surface mid-parse
/// (tokens are pulled lazily) and are carried through transparently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// Raised by `expect` on a lookahead of the wrong kind.
    #[error("expecting {expected}; saw {found}")]
    Unexpected { expected: String, found: Token },

    /// The lookahead cannot start a statement.
    #[error("expecting a statement; saw {found}")]
    ExpectedStatement { found: Token },

    /// The lookahead cannot start an expression.
    #[error("expecting an expression; saw {found}")]
    ExpectedExpression { found: Token },

    /// The lookahead is not a type keyword.
    #[error("expecting int | bool | float | char; saw {found}")]
    ExpectedType { found: Token },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl SyntaxError {
    /// The source range the error points at.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Unexpected { found, .. }
            | SyntaxError::ExpectedStatement { found }
            | SyntaxError::ExpectedExpression { found }
            | SyntaxError::ExpectedType { found } => found.span,
            SyntaxError::Lex(err) => err.span(),
        }
    }

    /// Convert this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self {
            SyntaxError::Lex(err) => return err.to_diagnostic(),
            SyntaxError::Unexpected { .. } => (ErrorCode::UnexpectedToken, "unexpected token here"),
            SyntaxError::ExpectedStatement { .. } => {
                (ErrorCode::ExpectedStatement, "not the start of a statement")
            }
            SyntaxError::ExpectedExpression { .. } => {
                (ErrorCode::ExpectedExpression, "not the start of an expression")
            }
            SyntaxError::ExpectedType { .. } => (ErrorCode::ExpectedType, "not a type keyword"),
        };

        let mut diagnostic =
            Diagnostic::error(DiagnosticKind::Parser, self.span(), self.to_string())
                .with_code(code)
                .with_label(Label::new(self.span(), label));

        if let Some(help) = code.suggestion() {
            diagnostic = diagnostic.with_help(help);
        }

        diagnostic
    }
}
