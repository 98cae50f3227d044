//! Runtime values for filtrex expressions.
//!
//! - [`Value`]: the dynamically typed value model with its coercions,
//!   ordering, membership test and lazy variants
//! - [`EvalError`]: every runtime failure, built through the factory
//!   functions in [`errors`]

pub mod errors;
mod value;

pub use errors::{EvalError, EvalResult};
pub use value::{format_decimal, parse_decimal, Context, FunctionValue, MemoCell, Value, ValueKind};

pub use bigdecimal::BigDecimal;
