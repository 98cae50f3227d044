//! Parser for filtrex expressions.
//!
//! [`parse`] lexes the source and builds an [`ExprArena`] by recursive
//! descent, one method per precedence level (see `grammar`).

mod error;
mod grammar;

use filtrex_ir::{ExprArena, ExprId, Span};
use filtrex_lexer::{Token, TokenKind};

pub use error::{ParseError, ParseErrorKind};

/// A successfully parsed expression: its nodes plus the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedExpr {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parse `source` into an expression tree.
///
/// The whole input must form exactly one expression.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    let tokens = filtrex_lexer::lex(source)?;
    let mut parser = Parser::new(source, tokens.as_slice());
    let root = parser.parse_expr()?;
    parser.expect(TokenKind::Eof, "end of input")?;
    tracing::trace!(nodes = parser.arena.len(), "parsed expression");
    Ok(ParsedExpr {
        arena: parser.arena,
        root,
    })
}

/// Recursive-descent parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    pub(crate) arena: ExprArena,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        let eof = tokens
            .last()
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY));
        Parser {
            source,
            tokens,
            pos: 0,
            eof,
            arena: ExprArena::new(),
        }
    }

    /// Current token; `Eof` once the stream is exhausted.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.peek(0)
    }

    /// Token `n` positions ahead of the cursor.
    #[inline]
    pub(crate) fn peek(&self, n: usize) -> Token {
        self.tokens.get(self.pos + n).copied().unwrap_or(self.eof)
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail naming what was `expected`.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        let token = self.current();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(expected, token.kind, token.span))
        }
    }

    /// Source text covered by `span`.
    #[inline]
    pub(crate) fn slice(&self, span: Span) -> &'a str {
        span.slice(self.source)
    }

    #[inline]
    pub(crate) fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}
