//! Filtrex: a small expression language for rules and filters.
//!
//! Compile an expression once, then run it against any number of contexts.
//! Context values may be lazy: a [`Value::Function`] is computed on every
//! access and a [`Value::Memoized`] at most once, and only when an
//! expression actually reaches it.
//!
//! ```text
//! let expr = filtrex::compile("user.age >= 18 and user.country in (\"NZ\", \"AU\")")?;
//! let mut context = Context::default();
//! context.insert("user".into(), Value::memoized(load_user));
//! let allowed = expr.run_bool(&context)?;
//! ```
//!
//! # Crates
//!
//! ```text
//! filtrex_lexer ──► filtrex_parse ──► filtrex_ir (ExprArena)
//!                                          │
//!            filtrex_value (Value) ──► filtrex_eval (Interpreter)
//!                                          │
//!                                       filtrex
//! ```

mod error;
mod executor;

use std::sync::Once;

pub use error::Error;
pub use executor::{compile, CompiledExpression, ExecutorBuilder};

pub use filtrex_eval::{builtin_names, EvalConfig, DEFAULT_REGEX_SIZE_LIMIT};
pub use filtrex_ir::Span;
pub use filtrex_parse::{ParseError, ParseErrorKind};
pub use filtrex_value::{
    format_decimal, parse_decimal, BigDecimal, Context, EvalError, EvalResult, FunctionValue,
    MemoCell, Value, ValueKind,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=filtrex=debug` or `RUST_LOG=filtrex_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
