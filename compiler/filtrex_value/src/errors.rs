//! Evaluation errors.
//!
//! Factory functions (e.g. `division_by_zero()`) are the construction API;
//! callers match on the `EvalError` variants.

use crate::Value;

/// Result of evaluating an expression or calling a value.
pub type EvalResult = Result<Value, EvalError>;

/// Any failure raised while running a compiled expression.
///
/// Every variant aborts the current run. Missing context paths are never
/// errors; they resolve to `Null`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A value could not be coerced, e.g. a map used as a boolean.
    #[error("cannot convert {from} to {to}")]
    TypeConversion {
        from: &'static str,
        to: &'static str,
    },

    /// A call names neither a built-in nor a context binding.
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    /// A non-function value was applied to arguments.
    #[error("{type_name} is not a function")]
    NotAFunction { type_name: &'static str },

    #[error("arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("index error: {message}")]
    Index { message: String },

    /// A built-in was called with the wrong number of arguments.
    #[error("{name} expects {expected} arguments, got {got}")]
    ArityMismatch {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },

    /// The right operand of `~=` is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("maximum expression depth exceeded (limit: {limit})")]
    DepthLimitExceeded { limit: usize },

    /// Raised by caller-supplied closures.
    #[error("{message}")]
    Custom { message: String },
}

impl EvalError {
    /// Error for caller-supplied `Function` and `Memoized` closures.
    pub fn custom(message: impl Into<String>) -> Self {
        EvalError::Custom {
            message: message.into(),
        }
    }
}

// Factory functions

#[cold]
pub fn type_conversion(from: &'static str, to: &'static str) -> EvalError {
    EvalError::TypeConversion { from, to }
}

#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::UnknownFunction {
        name: name.to_string(),
    }
}

#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::NotAFunction { type_name }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    arithmetic("division by zero")
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    arithmetic("modulo by zero")
}

#[cold]
pub fn invalid_exponent(exponent: &str) -> EvalError {
    arithmetic(&format!("invalid exponent {exponent}"))
}

#[cold]
pub fn arithmetic(message: &str) -> EvalError {
    EvalError::Arithmetic {
        message: message.to_string(),
    }
}

#[cold]
pub fn index_out_of_range(message: &str) -> EvalError {
    EvalError::Index {
        message: message.to_string(),
    }
}

#[cold]
pub fn arity_mismatch(name: &'static str, expected: &'static str, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name,
        expected,
        got,
    }
}

#[cold]
pub fn invalid_pattern(pattern: &str, message: impl ToString) -> EvalError {
    EvalError::InvalidPattern {
        pattern: pattern.to_string(),
        message: message.to_string(),
    }
}

#[cold]
pub fn depth_limit_exceeded(limit: usize) -> EvalError {
    EvalError::DepthLimitExceeded { limit }
}
