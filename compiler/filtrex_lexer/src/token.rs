//! Public token types.

use std::fmt;

use filtrex_ir::Span;

/// Token kinds produced by [`lex`](crate::lex).
///
/// Literal and symbol tokens carry no payload; the parser slices the source
/// with the token's span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Number,
    Str,
    Symbol,

    // Keywords
    Or,
    And,
    Not,
    In,
    /// `in~`, the inexact membership operator.
    InTilde,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    TildeEq,
    Question,
    Colon,

    // Delimiters
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable description used in parse errors.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Str => "string",
            Self::Symbol => "symbol",
            Self::Or => "`or`",
            Self::And => "`and`",
            Self::Not => "`not`",
            Self::In => "`in`",
            Self::InTilde => "`in~`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Percent => "`%`",
            Self::Caret => "`^`",
            Self::EqEq => "`==`",
            Self::NotEq => "`!=`",
            Self::Lt => "`<`",
            Self::LtEq => "`<=`",
            Self::Gt => "`>`",
            Self::GtEq => "`>=`",
            Self::TildeEq => "`~=`",
            Self::Question => "`?`",
            Self::Colon => "`:`",
            Self::Comma => "`,`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token at `index`, or the final (`Eof`) token past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).or_else(|| self.tokens.last())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}
