//! Parse error types.

use filtrex_ir::Span;
use filtrex_lexer::{LexError, LexErrorKind, TokenKind};

/// A syntax error: the source could not be turned into an expression tree.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(LexErrorKind),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },

    /// A numeric literal the decimal parser rejected.
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: Box<str> },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    /// 1-based line and column of the error within `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        self.span.line_col(source)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}
