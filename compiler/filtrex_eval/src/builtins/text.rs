//! `length`, `lower` and `substr`.

use bigdecimal::{RoundingMode, ToPrimitive};
use filtrex_value::errors::{arity_mismatch, index_out_of_range, type_conversion};
use filtrex_value::{format_decimal, EvalError, EvalResult, Value};

use super::{count, single};

/// Size of a value.
///
/// Strings count characters; decimals count the characters of their
/// canonical form. Booleans give 4 for `true` and 5 for `false`.
pub(super) fn length(args: &[Value]) -> EvalResult {
    let n = match single("length", args)?.resolve()? {
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        Value::Map(entries) => entries.len(),
        Value::Null => 0,
        Value::Decimal(d) => format_decimal(&d).chars().count(),
        Value::Boolean(b) => {
            if b {
                4
            } else {
                5
            }
        }
        other => return Err(type_conversion(other.type_name(), "length")),
    };
    Ok(count(n))
}

pub(super) fn lower(args: &[Value]) -> EvalResult {
    let text = single("lower", args)?.as_string()?;
    Ok(Value::string(text.to_lowercase()))
}

/// `substr(s, start, count)`, indexed by character.
///
/// `start` defaults to 0 and counts from the end when negative; `count`
/// defaults to the rest of the string. `Null` for either means the default.
pub(super) fn substr(args: &[Value]) -> EvalResult {
    let (text, start, len) = match args {
        [text] => (text, None, None),
        [text, start] => (text, Some(start), None),
        [text, start, len] => (text, Some(start), Some(len)),
        _ => return Err(arity_mismatch("substr", "1 to 3", args.len())),
    };

    let chars: Vec<char> = text.as_string()?.chars().collect();
    let total = i64::try_from(chars.len()).unwrap_or(i64::MAX);

    let mut from = optional_index(start)?.unwrap_or(0);
    if from < 0 {
        from += total;
    }
    let to = match optional_index(len)? {
        Some(n) => from.saturating_add(n),
        None => total,
    };

    let out_of_range = || {
        index_out_of_range(&format!(
            "substr range {from}..{to} is outside a string of length {total}"
        ))
    };
    if to > total || from > to {
        return Err(out_of_range());
    }
    let (Ok(from), Ok(to)) = (usize::try_from(from), usize::try_from(to)) else {
        return Err(out_of_range());
    };
    Ok(Value::string(chars[from..to].iter().collect::<String>()))
}

/// An integer argument, truncated toward zero; `None` when absent or `Null`.
fn optional_index(arg: Option<&Value>) -> Result<Option<i64>, EvalError> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let value = arg.resolve()?;
    if value.is_null() {
        return Ok(None);
    }
    let n = value.as_decimal()?.with_scale_round(0, RoundingMode::Down);
    n.to_i64().map(Some).ok_or_else(|| {
        index_out_of_range(&format!("index {} is out of range", format_decimal(&n)))
    })
}
