//! Built-in function library.
//!
//! A static `name -> fn` table, built once on first use and never mutated.
//! Built-ins shadow context bindings of the same name.

mod math;
mod sets;
mod text;

use std::sync::OnceLock;

use filtrex_value::errors::arity_mismatch;
use bigdecimal::BigDecimal;
use filtrex_value::{EvalError, EvalResult, Value};
use rustc_hash::FxHashMap;

/// Signature shared by every built-in.
pub type BuiltinFn = fn(&[Value]) -> EvalResult;

static BUILTINS: OnceLock<FxHashMap<&'static str, BuiltinFn>> = OnceLock::new();

fn table() -> &'static FxHashMap<&'static str, BuiltinFn> {
    BUILTINS.get_or_init(|| {
        let entries: [(&'static str, BuiltinFn); 15] = [
            ("abs", math::abs),
            ("ceil", math::ceil),
            ("floor", math::floor),
            ("round", math::round),
            ("sqrt", math::sqrt),
            ("min", math::min),
            ("max", math::max),
            ("random", math::random),
            ("length", text::length),
            ("lower", text::lower),
            ("substr", text::substr),
            ("union", sets::union),
            ("intersection", sets::intersection),
            ("difference", sets::difference),
            ("unique", sets::unique),
        ];
        entries.into_iter().collect()
    })
}

/// Look up a built-in by name.
#[inline]
pub fn lookup_builtin(name: &str) -> Option<BuiltinFn> {
    table().get(name).copied()
}

/// Names of every built-in, in no particular order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    table().keys().copied()
}

/// The only argument of a one-argument built-in.
fn single<'a>(name: &'static str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(arity_mismatch(name, "1", args.len())),
    }
}

#[inline]
fn count(n: usize) -> Value {
    Value::Decimal(BigDecimal::from(u64::try_from(n).unwrap_or(u64::MAX)))
}
