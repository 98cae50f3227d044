//! Lexer error types.

use filtrex_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("unexpected character `{found}`")]
    UnexpectedChar { found: char },
    /// Source longer than `u32::MAX` bytes.
    #[error("expression source is too large")]
    SourceTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }
}
