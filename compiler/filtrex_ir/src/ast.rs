//! Expression nodes and operators.
//!
//! Every node is tagged with an `ExprKind` and a `Span`; children are
//! `ExprId`s into the owning `ExprArena`.

use bigdecimal::BigDecimal;

use crate::{ExprId, ExprRange, Span, SymbolPath};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Membership
    In,
    NotIn,
    InexactIn,
    NotInexactIn,

    // Other
    Matches,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages and debug output.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "and",
            Self::Or => "or",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::InexactIn => "in~",
            Self::NotInexactIn => "not in~",
            Self::Matches => "~=",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 1: `^`
    /// - 2: `*` `/` `%`
    /// - 3: `+` `-`
    /// - 4: `==` `!=` `<` `<=` `>` `>=` `~=`
    /// - 5: `in` `not in` `in~` `not in~`
    /// - 6: `and`
    /// - 7: `or`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 3,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Matches => 4,
            Self::In | Self::NotIn | Self::InexactIn | Self::NotInexactIn => 5,
            Self::And => 6,
            Self::Or => 7,
        }
    }

    /// Whether this is one of the four membership operators.
    pub const fn is_membership(self) -> bool {
        matches!(
            self,
            Self::In | Self::NotIn | Self::InexactIn | Self::NotInexactIn
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation: `-x`
    Neg,
    /// Logical negation: `not x`
    Not,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "not",
        }
    }
}

/// A parse tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Node kinds, one per grammar rule the evaluator distinguishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// Numeric literal, already converted to an arbitrary-precision decimal.
    ///
    /// Literals written without a decimal point have scale 0.
    Number(BigDecimal),

    /// String literal, content between the quotes kept verbatim.
    Str(Box<str>),

    /// Symbol reference: `foo`, `user.profile.name`.
    Symbol(SymbolPath),

    /// Unary operation: `-x`, `not x`.
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: `left op right`.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Conditional: `cond ? then_branch : else_branch`.
    Ternary {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// List construction: `(a, b, c)` or `[a, b, c]`.
    ///
    /// `[x]` produces a one-element range; `[]` an empty one.
    List(ExprRange),

    /// Function call: `name(args...)`.
    Call { callee: SymbolPath, args: ExprRange },
}
