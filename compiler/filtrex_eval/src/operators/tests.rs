#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::str::FromStr;

use filtrex_ir::{BigDecimal, BinaryOp, UnaryOp};
use filtrex_value::{EvalError, Value};
use pretty_assertions::assert_eq;

use super::{evaluate_binary, evaluate_unary};
use crate::EvalConfig;

fn dec(text: &str) -> Value {
    Value::Decimal(BigDecimal::from_str(text).unwrap())
}

fn binary(op: BinaryOp, left: impl Into<Value>, right: impl Into<Value>) -> Result<Value, EvalError> {
    evaluate_binary(op, &left.into(), &right.into(), &EvalConfig::default())
}

#[test]
fn test_arithmetic_coerces_operands() {
    assert_eq!(binary(BinaryOp::Add, "2", 3).unwrap(), Value::from(5));
    assert_eq!(binary(BinaryOp::Sub, true, 3).unwrap(), Value::from(-2));
    assert_eq!(binary(BinaryOp::Mul, dec("1.4"), dec("1.1")).unwrap(), dec("1.54"));
    assert_eq!(binary(BinaryOp::Div, 9, 2).unwrap(), dec("4.5"));
    assert_eq!(binary(BinaryOp::Mod, 97, 10).unwrap(), Value::from(7));
    assert_eq!(binary(BinaryOp::Mod, -7, 3).unwrap(), Value::from(-1));
    assert_eq!(binary(BinaryOp::Add, Value::Null, 1).unwrap(), Value::from(1));
}

#[test]
fn test_division_and_modulo_by_zero() {
    assert!(matches!(
        binary(BinaryOp::Div, 1, 0),
        Err(EvalError::Arithmetic { .. })
    ));
    assert_eq!(
        binary(BinaryOp::Mod, 1, dec("0.0")).unwrap_err().to_string(),
        "arithmetic error: modulo by zero"
    );
}

#[test]
fn test_power_truncates_exponent() {
    assert_eq!(binary(BinaryOp::Pow, 2, 3).unwrap(), Value::from(8));
    assert_eq!(binary(BinaryOp::Pow, 2, dec("3.9")).unwrap(), Value::from(8));
    assert_eq!(binary(BinaryOp::Pow, 5, 0).unwrap(), Value::from(1));
    assert_eq!(binary(BinaryOp::Pow, dec("1.5"), 2).unwrap(), dec("2.25"));
}

#[test]
fn test_power_rejects_negative_exponent() {
    assert_eq!(
        binary(BinaryOp::Pow, 2, -1),
        Err(EvalError::Arithmetic {
            message: "invalid exponent -1".into()
        })
    );
}

#[test]
fn test_power_is_exact() {
    assert_eq!(
        binary(BinaryOp::Pow, 2, 100).unwrap(),
        dec("1267650600228229401496703205376")
    );
    assert_eq!(
        binary(BinaryOp::Pow, dec("0.1"), 30).unwrap(),
        dec("1E-30")
    );
    assert_eq!(
        binary(BinaryOp::Pow, 10, 40).unwrap().to_string(),
        format!("1{}", "0".repeat(40))
    );
}

#[test]
fn test_power_rejects_huge_exponent() {
    assert!(matches!(
        binary(BinaryOp::Pow, 1, dec("1000000000")),
        Err(EvalError::Arithmetic { .. })
    ));
}

#[test]
fn test_large_operands_do_not_overflow() {
    let max_96_bit = dec("79228162514264337593543950335");
    assert_eq!(
        binary(BinaryOp::Add, max_96_bit.clone(), 1).unwrap(),
        dec("79228162514264337593543950336")
    );
    assert_eq!(
        binary(BinaryOp::Mul, max_96_bit, 2).unwrap(),
        dec("158456325028528675187087900670")
    );
    assert_eq!(
        binary(BinaryOp::Sub, dec("-1E+40"), dec("1E+40")).unwrap(),
        dec("-2E+40")
    );
}

#[test]
fn test_division_keeps_long_quotients() {
    let third = binary(BinaryOp::Div, 1, 3).unwrap().to_string();
    assert!(third.starts_with("0.333333333333333333333333333333333"));
    assert!(third.len() > 40);
}

#[test]
fn test_arithmetic_rejects_non_numeric() {
    assert_eq!(
        binary(BinaryOp::Add, "abc", 1),
        Err(EvalError::TypeConversion {
            from: "string",
            to: "decimal"
        })
    );
}

#[test]
fn test_digit_separators_are_not_numeric() {
    assert_eq!(
        binary(BinaryOp::Add, "1_000", 1),
        Err(EvalError::TypeConversion {
            from: "string",
            to: "decimal"
        })
    );
    assert_eq!(binary(BinaryOp::Eq, "1_000", 1000).unwrap(), Value::FALSE);
    assert_eq!(binary(BinaryOp::Eq, "1000", 1000).unwrap(), Value::TRUE);
}

#[test]
fn test_comparisons() {
    assert_eq!(binary(BinaryOp::Eq, "4", 4).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::NotEq, 4, -4).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::Lt, 3, 4).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::LtEq, 4, 4).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::Gt, 4, 4).unwrap(), Value::FALSE);
    assert_eq!(binary(BinaryOp::GtEq, 5, 4).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::Lt, "apple", "banana").unwrap(), Value::TRUE);
}

#[test]
fn test_logical_results_are_booleans() {
    assert_eq!(binary(BinaryOp::And, 1, "x").unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::And, 1, 0).unwrap(), Value::FALSE);
    assert_eq!(binary(BinaryOp::Or, 0, "").unwrap(), Value::FALSE);
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::from(0)).unwrap(), Value::TRUE);
    assert_eq!(evaluate_unary(UnaryOp::Neg, &Value::from("2.5")).unwrap(), dec("-2.5"));
}

#[test]
fn test_membership_operators() {
    let list = Value::array([Value::from(1), Value::from(2)]);
    assert_eq!(binary(BinaryOp::In, 1, list.clone()).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::NotIn, 3, list.clone()).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::In, "1", list.clone()).unwrap(), Value::FALSE);
    assert_eq!(binary(BinaryOp::InexactIn, "1", list.clone()).unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::NotInexactIn, "1", list).unwrap(), Value::FALSE);
}

#[test]
fn test_regex_match_is_a_search() {
    assert_eq!(binary(BinaryOp::Matches, "hello", "^[hH]ello").unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::Matches, "say hello", "ell").unwrap(), Value::TRUE);
    assert_eq!(binary(BinaryOp::Matches, "goodbye", "^[hH]ello").unwrap(), Value::FALSE);
    assert_eq!(binary(BinaryOp::Matches, 12.to_string(), "^1").unwrap(), Value::TRUE);
}

#[test]
fn test_invalid_pattern() {
    let err = binary(BinaryOp::Matches, "x", "(").unwrap_err();
    assert!(matches!(err, EvalError::InvalidPattern { ref pattern, .. } if pattern == "("));
}

#[test]
fn test_regex_size_limit_comes_from_config() {
    let config = EvalConfig::default().regex_size_limit(16);
    let result = evaluate_binary(
        BinaryOp::Matches,
        &Value::from("abc"),
        &Value::from(r"\w{500}"),
        &config,
    );
    assert!(matches!(result, Err(EvalError::InvalidPattern { .. })));
}
