//! Unified error type for compiling and running expressions.

use filtrex_parse::ParseError;
use filtrex_value::EvalError;

/// Failure from [`compile`](crate::compile) or
/// [`CompiledExpression::run`](crate::CompiledExpression::run).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source is not a valid expression.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// Evaluation failed; the run produced no value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// 1-based line and column of a syntax error within `source`.
    pub fn line_col(&self, source: &str) -> Option<(usize, usize)> {
        match self {
            Error::Syntax(err) => Some(err.line_col(source)),
            Error::Eval(_) => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }
}
