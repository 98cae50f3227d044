//! Tokenizer for filtrex expressions, built on logos.
//!
//! [`lex`] turns source text into a [`TokenList`] terminated by an `Eof`
//! token. The first unrecognized input aborts lexing with a [`LexError`].

mod lex_error;
mod raw_token;
mod token;

use filtrex_ir::Span;
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;
pub use token::{Token, TokenKind, TokenList};

/// Lex `source` into tokens.
///
/// # Errors
/// Returns the first character (or unterminated string) that starts no
/// valid token.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let eof_pos = u32::try_from(source.len())
        .map_err(|_| LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY))?;

    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        // Offsets fit: the whole source length was checked above.
        let span = Span::try_from_range(range.clone()).unwrap_or(Span::DUMMY);
        match token_result {
            Ok(raw) => result.push(Token::new(convert_token(raw), span)),
            Err(()) => return Err(classify_error(source, range.start, eof_pos)),
        }
    }

    result.push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos)));
    Ok(result)
}

/// Decide what an unlexable position means.
///
/// A `"` that failed to match the string rule has no closing quote, so the
/// error covers the rest of the input.
fn classify_error(source: &str, start: usize, eof_pos: u32) -> LexError {
    let found = source[start..].chars().next().unwrap_or('\0');
    let start32 = u32::try_from(start).unwrap_or(eof_pos);
    if found == '"' {
        return LexError::new(
            LexErrorKind::UnterminatedString,
            Span::new(start32, eof_pos),
        );
    }
    let end = u32::try_from(start + found.len_utf8()).unwrap_or(eof_pos);
    LexError::new(LexErrorKind::UnexpectedChar { found }, Span::new(start32, end))
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Or => TokenKind::Or,
        RawToken::And => TokenKind::And,
        RawToken::Not => TokenKind::Not,
        RawToken::In => TokenKind::In,
        RawToken::InTilde => TokenKind::InTilde,
        RawToken::Number => TokenKind::Number,
        RawToken::Str => TokenKind::Str,
        RawToken::Symbol => TokenKind::Symbol,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Caret => TokenKind::Caret,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::TildeEq => TokenKind::TildeEq,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    }
}
