//! Operator implementations.
//!
//! Direct enum dispatch: the operator set is fixed, so a `match` keeps every
//! case visible and exhaustive. Operands arrive already evaluated. The
//! interpreter short-circuits `or` itself and only calls in when the left
//! side is falsy.

use std::cmp::Ordering;

use bigdecimal::{BigDecimal, One, RoundingMode, ToPrimitive, Zero};
use filtrex_ir::{BinaryOp, UnaryOp};
use filtrex_value::errors::{division_by_zero, invalid_exponent, invalid_pattern, modulo_by_zero};
use filtrex_value::{format_decimal, EvalResult, Value};
use regex::RegexBuilder;

use crate::EvalConfig;

/// Evaluate `left op right`.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value, config: &EvalConfig) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Decimal(left.as_decimal()? + right.as_decimal()?)),
        BinaryOp::Sub => Ok(Value::Decimal(left.as_decimal()? - right.as_decimal()?)),
        BinaryOp::Mul => Ok(Value::Decimal(left.as_decimal()? * right.as_decimal()?)),
        BinaryOp::Div => {
            let (a, b) = (left.as_decimal()?, right.as_decimal()?);
            if b.is_zero() {
                return Err(division_by_zero());
            }
            Ok(Value::Decimal(a / b))
        }
        BinaryOp::Mod => {
            let (a, b) = (left.as_decimal()?, right.as_decimal()?);
            if b.is_zero() {
                return Err(modulo_by_zero());
            }
            Ok(Value::Decimal(a % b))
        }
        BinaryOp::Pow => eval_power(&left.as_decimal()?, &right.as_decimal()?),

        BinaryOp::Eq => compare(left, right, Ordering::is_eq),
        BinaryOp::NotEq => compare(left, right, Ordering::is_ne),
        BinaryOp::Lt => compare(left, right, Ordering::is_lt),
        BinaryOp::LtEq => compare(left, right, Ordering::is_le),
        BinaryOp::Gt => compare(left, right, Ordering::is_gt),
        BinaryOp::GtEq => compare(left, right, Ordering::is_ge),

        // Both operands were evaluated by the caller; no short-circuit.
        BinaryOp::And => {
            let l = left.as_boolean()?;
            let r = right.as_boolean()?;
            Ok(Value::Boolean(l && r))
        }
        BinaryOp::Or => Ok(Value::Boolean(left.as_boolean()? || right.as_boolean()?)),

        BinaryOp::In => Ok(Value::Boolean(left.contains_in(right, true)?)),
        BinaryOp::NotIn => Ok(Value::Boolean(!left.contains_in(right, true)?)),
        BinaryOp::InexactIn => Ok(Value::Boolean(left.contains_in(right, false)?)),
        BinaryOp::NotInexactIn => Ok(Value::Boolean(!left.contains_in(right, false)?)),

        BinaryOp::Matches => eval_regex_match(left, right, config),
    }
}

/// Evaluate a prefix operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Neg => Ok(Value::Decimal(-operand.as_decimal()?)),
        UnaryOp::Not => Ok(Value::Boolean(!operand.as_boolean()?)),
    }
}

#[inline]
fn compare(left: &Value, right: &Value, test: fn(Ordering) -> bool) -> EvalResult {
    Ok(Value::Boolean(test(left.compare_to(right)?)))
}

/// Largest exponent `^` accepts.
const MAX_EXPONENT: u64 = 999_999_999;

/// Only the integer part of the exponent counts; it must lie in
/// `0..=MAX_EXPONENT`. The result is exact.
fn eval_power(base: &BigDecimal, exponent: &BigDecimal) -> EvalResult {
    let exp = exponent
        .with_scale_round(0, RoundingMode::Down)
        .to_u64()
        .filter(|&n| n <= MAX_EXPONENT)
        .ok_or_else(|| invalid_exponent(&format_decimal(exponent)))?;
    Ok(Value::Decimal(pow(base, exp)))
}

/// Exponentiation by squaring.
fn pow(base: &BigDecimal, mut exp: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &square;
        }
        exp >>= 1;
        if exp > 0 {
            square = &square * &square;
        }
    }
    result
}

/// `text ~= pattern`: true if the pattern matches anywhere in the text.
fn eval_regex_match(left: &Value, right: &Value, config: &EvalConfig) -> EvalResult {
    let pattern = right.as_string()?;
    let text = left.as_string()?;
    let regex = RegexBuilder::new(&pattern)
        .size_limit(config.regex_size_limit)
        .build()
        .map_err(|e| invalid_pattern(&pattern, e))?;
    Ok(Value::Boolean(regex.is_match(&text)))
}

#[cfg(test)]
mod tests;
