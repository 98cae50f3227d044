//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion into the public `TokenKind`.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("or")]
    Or,
    #[token("and")]
    And,
    #[token("not")]
    Not,
    #[token("in")]
    In,
    #[token("in~")]
    InTilde,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    // A backslash keeps the next character inside the literal; the content
    // itself is not unescaped.
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$.]*")]
    Symbol,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("~=")]
    TildeEq,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}
