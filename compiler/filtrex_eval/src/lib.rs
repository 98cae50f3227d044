//! Evaluator for filtrex expressions.
//!
//! - `interpreter`: recursive evaluation of an `ExprArena`
//! - `operators`: arithmetic, comparison, membership, regex match
//! - `resolve`: dot-path lookup in a context
//! - `builtins`: the static function library
//! - `config`: depth and regex limits

mod builtins;
mod config;
mod interpreter;
mod operators;
mod resolve;

use filtrex_ir::{ExprArena, ExprId};
use filtrex_value::{Context, EvalResult};

pub use builtins::{builtin_names, lookup_builtin, BuiltinFn};
pub use config::{EvalConfig, DEFAULT_REGEX_SIZE_LIMIT};
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, evaluate_unary};
pub use resolve::{lookup_callee, resolve_path};

/// Evaluate the tree rooted at `root` against `context`.
///
/// The result is fully resolved: never `Function` or `Memoized`.
pub fn evaluate(arena: &ExprArena, root: ExprId, context: &Context, config: &EvalConfig) -> EvalResult {
    Interpreter::new(arena, context, config).eval(root)?.resolve()
}
