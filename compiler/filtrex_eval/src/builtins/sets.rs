//! Set operations over arrays.
//!
//! Every operand is read with `as_array`, so a scalar acts as a one-element
//! set. Membership is exact: `1` and `"1"` are different elements.

use filtrex_value::{EvalResult, Value};

use super::single;

pub(super) fn union(args: &[Value]) -> EvalResult {
    reduce(args, union_of)
}

pub(super) fn intersection(args: &[Value]) -> EvalResult {
    reduce(args, intersection_of)
}

pub(super) fn difference(args: &[Value]) -> EvalResult {
    reduce(args, difference_of)
}

/// Elements of the argument in first-seen order, duplicates dropped.
pub(super) fn unique(args: &[Value]) -> EvalResult {
    union_of(&Value::array([]), single("unique", args)?)
}

/// Left-to-right pairwise reduction. No arguments give `Null`; a single
/// argument is returned unchanged.
fn reduce(args: &[Value], op: fn(&Value, &Value) -> EvalResult) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Ok(Value::Null);
    };
    let mut acc = first.clone();
    for next in rest {
        acc = op(&acc, next)?;
    }
    Ok(acc)
}

/// `left` followed by each element of `right` not already in the result.
///
/// Membership is checked against the growing result, so duplicates within
/// `right` are dropped too: `union([1], [2, 2])` is `[1, 2]`. Duplicates
/// already in `left` are kept.
fn union_of(left: &Value, right: &Value) -> EvalResult {
    let mut out = left.as_array()?.to_vec();
    for item in right.as_array()?.iter() {
        if !item.is_member_of(&out, true)? {
            out.push(item.clone());
        }
    }
    Ok(Value::from(out))
}

/// Elements of `right` that are in `left`.
fn intersection_of(left: &Value, right: &Value) -> EvalResult {
    let left = left.as_array()?;
    let mut out = Vec::new();
    for item in right.as_array()?.iter() {
        if item.is_member_of(&left, true)? {
            out.push(item.clone());
        }
    }
    Ok(Value::from(out))
}

/// Elements of `left` that are not in `right`.
fn difference_of(left: &Value, right: &Value) -> EvalResult {
    let right = right.as_array()?;
    let mut out = Vec::new();
    for item in left.as_array()?.iter() {
        if !item.is_member_of(&right, true)? {
            out.push(item.clone());
        }
    }
    Ok(Value::from(out))
}
