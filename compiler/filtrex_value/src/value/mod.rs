//! Runtime values.
//!
//! `Value` is a dynamically typed sum with JavaScript-like coercion rules.
//! Heap payloads sit behind `Arc`, so cloning a value is cheap and values can
//! be shared between threads running the same compiled expression.
//!
//! Two variants are lazy:
//! - [`Value::Function`] is invoked on every access.
//! - [`Value::Memoized`] is invoked at most once successfully; every clone
//!   shares the cell and sees the cached result afterward.
//!
//! Every coercion resolves lazy values first.

mod coerce;
mod compare;
mod memo;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use rustc_hash::FxHashMap;

use crate::errors::{not_a_function, EvalResult};

pub use coerce::{format_decimal, parse_decimal};
pub use memo::MemoCell;

/// Named bindings an expression is evaluated against.
pub type Context = FxHashMap<String, Value>;

/// Shared closure behind a [`Value::Function`].
#[derive(Clone)]
pub struct FunctionValue(Arc<dyn Fn(&[Value]) -> EvalResult + Send + Sync>);

impl FunctionValue {
    pub fn new(f: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static) -> Self {
        FunctionValue(Arc::new(f))
    }

    /// Invoke the closure. Results are never cached.
    #[inline]
    pub fn call(&self, args: &[Value]) -> EvalResult {
        tracing::trace!(args = args.len(), "invoking function value");
        (self.0)(args)
    }

    /// Whether both handles point at the same closure.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<function>")
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    /// Arbitrary-precision decimal; never a binary float.
    Decimal(BigDecimal),
    String(Arc<str>),
    /// Absent or undefined. Distinct from the empty string.
    Null,
    Array(Arc<[Value]>),
    Map(Arc<Context>),
    /// Re-invoked on every resolution and every call.
    Function(FunctionValue),
    /// Invoked once, then replaced in place by its result.
    Memoized(MemoCell),
}

/// Variant tag of a [`Value`], read without resolving it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Decimal,
    String,
    Null,
    Array,
    Map,
    Function,
    Memoized,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Decimal => "decimal",
            ValueKind::String => "string",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
            ValueKind::Function => "function",
            ValueKind::Memoized => "memoized",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory methods

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    #[inline]
    pub fn decimal(d: impl Into<BigDecimal>) -> Self {
        Value::Decimal(d.into())
    }

    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn map(entries: Context) -> Self {
        Value::Map(Arc::new(entries))
    }

    /// Build a map from key/value pairs.
    pub fn map_from<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A value computed by `f` on every access.
    pub fn function(f: impl Fn(&[Value]) -> EvalResult + Send + Sync + 'static) -> Self {
        Value::Function(FunctionValue::new(f))
    }

    /// A value computed by `f` the first time it is needed, then cached.
    pub fn memoized(f: impl Fn() -> EvalResult + Send + 'static) -> Self {
        Value::Memoized(MemoCell::new(f))
    }
}

// Inspection

impl Value {
    /// Variant tag, without resolving lazy values.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::Null => ValueKind::Null,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Function(_) => ValueKind::Function,
            Value::Memoized(_) => ValueKind::Memoized,
        }
    }

    /// Label used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this is a `Function` or `Memoized` value.
    #[inline]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Memoized(_))
    }
}

// Resolution and application

impl Value {
    /// Force lazy values.
    ///
    /// A `Memoized` value runs its closure the first time and caches the
    /// result; a `Function` value runs its closure with no arguments every
    /// time. Results that are themselves lazy are resolved too, so the
    /// returned value is never `Function` or `Memoized`.
    pub fn resolve(&self) -> EvalResult {
        match self {
            Value::Memoized(cell) => cell.resolve(),
            Value::Function(f) => f.call(&[])?.resolve(),
            other => Ok(other.clone()),
        }
    }

    /// Call this value with `args`.
    ///
    /// Only `Function` values can be applied; a memoized value is never
    /// treated as a function.
    pub fn apply(&self, args: &[Value]) -> EvalResult {
        match self {
            Value::Function(f) => f.call(args),
            other => Err(not_a_function(other.type_name())),
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Decimal(BigDecimal::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Decimal(BigDecimal::from(n))
    }
}

/// Goes through the shortest text that round-trips the float, so `0.1`
/// becomes exactly `0.1` rather than its binary expansion. NaN and the
/// infinities have no decimal form and become `Null`.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        if !n.is_finite() {
            return Value::Null;
        }
        BigDecimal::from_str(&n.to_string()).map_or(Value::Null, Value::Decimal)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

impl From<Context> for Value {
    fn from(entries: Context) -> Self {
        Value::map(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter)
    }
}

// Equality

/// Structural equality without resolution or coercion.
///
/// Decimals compare numerically (`1.0 == 1`). Lazy values are equal only to
/// handles of the same closure. Operators never use this; they go through
/// `compare_to`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Memoized(a), Value::Memoized(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// Display

/// Debug-oriented rendering. Never fails and never runs closures: maps are
/// shown with sorted keys, an unresolved memo cell as `<memoized>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Decimal(d) => f.write_str(&format_decimal(d)),
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort_unstable();
                f.write_str("{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}:{}", entries[key])?;
                }
                f.write_str("}")
            }
            Value::Function(_) => f.write_str("<function>"),
            Value::Memoized(cell) => match cell.peek() {
                Some(value) => write!(f, "{value}"),
                None => f.write_str("<memoized>"),
            },
        }
    }
}
