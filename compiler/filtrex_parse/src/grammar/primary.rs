//! Primary expressions: literals, symbols, calls, groups and lists.

use std::str::FromStr;

use filtrex_ir::{BigDecimal, Expr, ExprId, ExprKind, ExprRange, Span, SymbolPath};
use filtrex_lexer::TokenKind;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let text = self.slice(token.span);
                let value = BigDecimal::from_str(text).map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidNumber { text: text.into() },
                        token.span,
                    )
                })?;
                Ok(self.alloc(ExprKind::Number(value), token.span))
            }
            TokenKind::Str => {
                self.advance();
                let text = self.slice(token.span);
                let content = text.get(1..text.len().saturating_sub(1)).unwrap_or_default();
                Ok(self.alloc(ExprKind::Str(content.into()), token.span))
            }
            TokenKind::Symbol => {
                self.advance();
                let path = SymbolPath::parse(self.slice(token.span));
                if self.check(TokenKind::LParen) {
                    self.advance();
                    let (args, end) = self.parse_items(TokenKind::RParen, "`)` after arguments")?;
                    return Ok(self.alloc(
                        ExprKind::Call { callee: path, args },
                        token.span.merge(end),
                    ));
                }
                Ok(self.alloc(ExprKind::Symbol(path), token.span))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBracket => {
                self.advance();
                let (items, end) = self.parse_items(TokenKind::RBracket, "`]` after list")?;
                Ok(self.alloc(ExprKind::List(items), token.span.merge(end)))
            }
            found => Err(ParseError::unexpected("expression", found, token.span)),
        }
    }

    /// `( e )` is a group; `( e, ... )` is a list.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let open = self.advance().span;
        let first = self.parse_expr()?;
        if self.check(TokenKind::RParen) {
            self.advance();
            return Ok(first);
        }
        if !self.check(TokenKind::Comma) {
            let token = self.current();
            return Err(ParseError::unexpected("`,` or `)`", token.kind, token.span));
        }

        let mut items = vec![first];
        while self.check(TokenKind::Comma) {
            self.advance();
            items.push(self.parse_expr()?);
        }
        let close = self.expect(TokenKind::RParen, "`)` after list")?.span;
        let range = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::List(range), open.merge(close)))
    }

    /// Comma-separated expressions up to `close`; the list may be empty.
    /// Returns the stored range and the closing token's span.
    fn parse_items(
        &mut self,
        close: TokenKind,
        expected: &'static str,
    ) -> Result<(ExprRange, Span), ParseError> {
        let mut items = Vec::new();
        if !self.check(close) {
            items.push(self.parse_expr()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                items.push(self.parse_expr()?);
            }
        }
        let end = self.expect(close, expected)?.span;
        Ok((self.arena.alloc_expr_list(items), end))
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }
}
