//! Expression grammar.
//!
//! Precedence, loosest first:
//!
//! | level | operators | assoc |
//! |---|---|---|
//! | ternary | `c ? a : b` | right |
//! | or | `or` | left |
//! | and | `and` | left |
//! | membership | `in` `not in` `in~` `not in~` | left |
//! | comparison | `==` `!=` `<` `<=` `>` `>=` `~=` | left |
//! | additive | `+` `-` | left |
//! | multiplicative | `*` `/` `%` | left |
//! | power | `^` | left |
//! | prefix | `not`, then unary `-` | |

mod primary;

use filtrex_ir::{BinaryOp, Expr, ExprId, ExprKind, Span, UnaryOp};
use filtrex_lexer::TokenKind;
use filtrex_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_ternary())
    }

    fn parse_ternary(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_or()?;
        if !self.check(TokenKind::Question) {
            return Ok(cond);
        }
        self.advance();
        let then_branch = self.parse_expr()?;
        self.expect(TokenKind::Colon, "`:` in conditional expression")?;
        let else_branch = self.parse_expr()?;

        let span = self.span_of(cond).merge(self.span_of(else_branch));
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )))
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_and, |kind| {
            (kind == TokenKind::Or).then_some(BinaryOp::Or)
        })
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_membership, |kind| {
            (kind == TokenKind::And).then_some(BinaryOp::And)
        })
    }

    /// `in`, `in~` and their `not` forms. The negated forms need two tokens
    /// of lookahead, so this level does not use `parse_left_assoc`.
    fn parse_membership(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let (op, width) = match (self.current().kind, self.peek(1).kind) {
                (TokenKind::In, _) => (BinaryOp::In, 1),
                (TokenKind::InTilde, _) => (BinaryOp::InexactIn, 1),
                (TokenKind::Not, TokenKind::In) => (BinaryOp::NotIn, 2),
                (TokenKind::Not, TokenKind::InTilde) => (BinaryOp::NotInexactIn, 2),
                _ => break,
            };
            for _ in 0..width {
                self.advance();
            }
            let right = self.parse_comparison()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_additive, |kind| match kind {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::TildeEq => Some(BinaryOp::Matches),
            _ => None,
        })
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_multiplicative, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_power, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        })
    }

    fn parse_power(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_not, |kind| {
            (kind == TokenKind::Caret).then_some(BinaryOp::Pow)
        })
    }

    /// `not x`. Binds tighter than every binary operator, so
    /// `not a == b` is `(not a) == b`.
    fn parse_not(&mut self) -> Result<ExprId, ParseError> {
        if !self.check(TokenKind::Not) {
            return self.parse_negate();
        }
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_not())?;
        Ok(self.alloc_unary(UnaryOp::Not, operand, start))
    }

    fn parse_negate(&mut self) -> Result<ExprId, ParseError> {
        if !self.check(TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_negate())?;
        Ok(self.alloc_unary(UnaryOp::Neg, operand, start))
    }

    /// One left-associative binary level: `next (op next)*`.
    fn parse_left_assoc(
        &mut self,
        next: fn(&mut Self) -> Result<ExprId, ParseError>,
        match_op: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self.current().kind) {
            self.advance();
            let right = next(self)?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    fn alloc_unary(&mut self, op: UnaryOp, operand: ExprId, start: Span) -> ExprId {
        let span = start.merge(self.span_of(operand));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span))
    }
}
