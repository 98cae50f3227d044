//! Numeric built-ins.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use filtrex_value::errors::{arithmetic, arity_mismatch};
use filtrex_value::{EvalResult, Value};
use rand::Rng;

use super::single;

/// Digits of precision for `random()`.
const RANDOM_SCALE: i64 = 16;
const RANDOM_RESOLUTION: i64 = 10_000_000_000_000_000;

/// Significant digits kept by `sqrt`.
const SQRT_SIGNIFICANT_DIGITS: i64 = 4;

pub(super) fn abs(args: &[Value]) -> EvalResult {
    Ok(Value::Decimal(single("abs", args)?.as_decimal()?.abs()))
}

pub(super) fn ceil(args: &[Value]) -> EvalResult {
    round_with("ceil", args, RoundingMode::Ceiling)
}

pub(super) fn floor(args: &[Value]) -> EvalResult {
    round_with("floor", args, RoundingMode::Floor)
}

/// Half-up: `round(2.5) == 3`, `round(-2.5) == -3`.
pub(super) fn round(args: &[Value]) -> EvalResult {
    round_with("round", args, RoundingMode::HalfUp)
}

fn round_with(name: &'static str, args: &[Value], mode: RoundingMode) -> EvalResult {
    let value = single(name, args)?.as_decimal()?;
    Ok(Value::Decimal(value.with_scale_round(0, mode)))
}

/// Square root, rounded half-up to four significant digits.
pub(super) fn sqrt(args: &[Value]) -> EvalResult {
    let value = single("sqrt", args)?.as_decimal()?;
    if value < BigDecimal::zero() {
        return Err(arithmetic("square root of a negative number"));
    }
    let root = value
        .sqrt()
        .ok_or_else(|| arithmetic("square root of a negative number"))?;
    Ok(Value::Decimal(round_significant(
        &root,
        SQRT_SIGNIFICANT_DIGITS,
        RoundingMode::HalfUp,
    )))
}

/// Rounds to `digits` significant digits.
fn round_significant(value: &BigDecimal, digits: i64, mode: RoundingMode) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::zero();
    }
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let len = mantissa.to_string().trim_start_matches('-').len();
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    value.with_scale_round(scale - len + digits, mode)
}

pub(super) fn min(args: &[Value]) -> EvalResult {
    best(args, |candidate, best| candidate < best)
}

pub(super) fn max(args: &[Value]) -> EvalResult {
    best(args, |candidate, best| candidate > best)
}

/// The argument `better` prefers over all others; the first wins ties.
fn best(args: &[Value], better: fn(&BigDecimal, &BigDecimal) -> bool) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Value::Null);
    };
    let mut best = first.as_decimal()?;
    for arg in rest {
        let candidate = arg.as_decimal()?;
        if better(&candidate, &best) {
            best = candidate;
        }
    }
    Ok(Value::Decimal(best))
}

/// `random()` is uniform in `[0, 1)`; `random(n)` scales that by `n` and
/// rounds half-up to an integer.
pub(super) fn random(args: &[Value]) -> EvalResult {
    let draw = rand::thread_rng().gen_range(0..RANDOM_RESOLUTION);
    let fraction = BigDecimal::new(draw.into(), RANDOM_SCALE);
    match args {
        [] => Ok(Value::Decimal(fraction)),
        [scale] => {
            let scaled = fraction * scale.as_decimal()?;
            Ok(Value::Decimal(scaled.with_scale_round(0, RoundingMode::HalfUp)))
        }
        _ => Err(arity_mismatch("random", "0 or 1", args.len())),
    }
}
