//! Coercions between value variants.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::{BigDecimal, One, Zero};

use super::Value;
use crate::errors::{type_conversion, EvalError};

/// Places of padding beyond which a decimal renders in scientific notation.
const PLAIN_FORMAT_LIMIT: u64 = 1_000;

/// Parse text as a decimal: plain (`-12.50`, `.5`) or scientific (`1.5e3`).
///
/// The text must be an optional sign, digits with at most one point, and an
/// optional exponent. Digit separators and surrounding whitespace are
/// rejected.
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    if !is_decimal_text(text.as_bytes()) {
        return None;
    }
    BigDecimal::from_str(text).ok()
}

fn is_decimal_text(bytes: &[u8]) -> bool {
    let mut rest = strip_sign(bytes);
    let int_digits = leading_digits(rest);
    rest = &rest[int_digits..];

    let mut frac_digits = 0;
    if let Some(after_point) = rest.strip_prefix(b".") {
        frac_digits = leading_digits(after_point);
        rest = &after_point[frac_digits..];
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if let Some(exponent) = rest.strip_prefix(b"e").or_else(|| rest.strip_prefix(b"E")) {
        let exponent = strip_sign(exponent);
        let exp_digits = leading_digits(exponent);
        return exp_digits > 0 && exp_digits == exponent.len();
    }
    rest.is_empty()
}

fn strip_sign(bytes: &[u8]) -> &[u8] {
    match bytes {
        [b'+' | b'-', rest @ ..] => rest,
        _ => bytes,
    }
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Canonical text of a decimal: trailing zeros dropped, plain notation
/// (`1500`, `0.25`, `-3`). Numbers that would need more than a thousand
/// places of padding use scientific notation instead (`1E+5000`).
pub fn format_decimal(d: &BigDecimal) -> String {
    let mut out = String::new();
    write_decimal(d, &mut out);
    out
}

pub(super) fn write_decimal(d: &BigDecimal, out: &mut String) {
    if d.is_zero() {
        out.push('0');
        return;
    }
    let (mantissa, scale) = d.normalized().as_bigint_and_exponent();
    let text = mantissa.to_string();
    let digits = match text.strip_prefix('-') {
        Some(rest) => {
            out.push('-');
            rest
        }
        None => text.as_str(),
    };
    let len = i64::try_from(digits.len()).unwrap_or(i64::MAX);

    let padding = if scale <= 0 {
        scale.unsigned_abs()
    } else {
        (scale - len).max(0).unsigned_abs()
    };
    if padding > PLAIN_FORMAT_LIMIT {
        let (first, tail) = digits.split_at(1);
        out.push_str(first);
        if !tail.is_empty() {
            out.push('.');
            out.push_str(tail);
        }
        let exponent = len - 1 - scale;
        out.push_str(&format!("E{}{exponent}", if exponent < 0 { "" } else { "+" }));
        return;
    }

    let zeros = |n: u64| "0".repeat(usize::try_from(n).unwrap_or(0));
    if scale <= 0 {
        out.push_str(digits);
        out.push_str(&zeros(scale.unsigned_abs()));
    } else if scale < len {
        let point = digits.len() - usize::try_from(scale).unwrap_or(0);
        out.push_str(&digits[..point]);
        out.push('.');
        out.push_str(&digits[point..]);
    } else {
        out.push_str("0.");
        out.push_str(&zeros((scale - len).unsigned_abs()));
        out.push_str(digits);
    }
}

impl Value {
    /// Truthiness: `0`, `false`, `""` and `Null` are false; arrays are
    /// always true; maps cannot be converted.
    pub fn as_boolean(&self) -> Result<bool, EvalError> {
        match self.resolve()? {
            Value::Boolean(b) => Ok(b),
            Value::Decimal(d) => Ok(!d.is_zero()),
            Value::Null => Ok(false),
            Value::String(s) => Ok(!s.is_empty()),
            Value::Array(_) => Ok(true),
            other => Err(type_conversion(other.type_name(), "boolean")),
        }
    }

    pub fn as_decimal(&self) -> Result<BigDecimal, EvalError> {
        match self.resolve()? {
            Value::Boolean(b) => Ok(if b { BigDecimal::one() } else { BigDecimal::zero() }),
            Value::Null => Ok(BigDecimal::zero()),
            Value::Decimal(d) => Ok(d),
            Value::String(s) => parse_decimal(&s).ok_or_else(|| type_conversion("string", "decimal")),
            other => Err(type_conversion(other.type_name(), "decimal")),
        }
    }

    /// Canonical string form, applied the same way at every nesting level.
    ///
    /// `Null` is the empty string, decimals go through [`format_decimal`],
    /// arrays are `[a,b]`. Maps cannot be converted.
    pub fn as_string(&self) -> Result<String, EvalError> {
        let mut out = String::new();
        self.write_canonical(&mut out)?;
        Ok(out)
    }

    fn write_canonical(&self, out: &mut String) -> Result<(), EvalError> {
        match self.resolve()? {
            Value::Boolean(b) => out.push_str(if b { "true" } else { "false" }),
            Value::Null => {}
            Value::String(s) => out.push_str(&s),
            Value::Decimal(d) => write_decimal(&d, out),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_canonical(out)?;
                }
                out.push(']');
            }
            other => return Err(type_conversion(other.type_name(), "string")),
        }
        Ok(())
    }

    /// The elements of an array, or a one-element sequence holding the
    /// resolved value.
    pub fn as_array(&self) -> Result<Arc<[Value]>, EvalError> {
        match self.resolve()? {
            Value::Array(items) => Ok(items),
            other => Ok(Arc::from([other])),
        }
    }

    /// Whether `as_decimal` would succeed and the value is not `Null`.
    pub fn can_be_numeric(&self) -> Result<bool, EvalError> {
        Ok(match self.resolve()? {
            Value::Decimal(_) | Value::Boolean(_) => true,
            Value::String(s) => parse_decimal(&s).is_some(),
            _ => false,
        })
    }
}
