//! End-to-end scenarios and algebraic laws.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use filtrex::{compile, format_decimal, BigDecimal, Context, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run(source: &str) -> Value {
    compile(source).unwrap().run(&Context::default()).unwrap()
}

#[test]
fn precedence_of_arithmetic() {
    assert_eq!(run("1 + 2 * 3"), Value::from(7));
}

#[test]
fn string_membership() {
    assert_eq!(run("\"foo\" in (\"foo\", \"bar\")"), Value::TRUE);
}

#[test]
fn length_of_list_and_boolean() {
    assert_eq!(run("length([1, 2, 3])"), Value::from(3));
    assert_eq!(run("length(true)"), Value::from(4));
}

#[test]
fn subset_membership() {
    assert_eq!(run("(1, 2) in (1, 2, 3)"), Value::TRUE);
    assert_eq!(run("(3, 4) in (1, 2, 3)"), Value::FALSE);
}

#[test]
fn missing_nested_path_is_falsy() {
    let mut ctx = Context::default();
    ctx.insert("user".into(), Value::map(Context::default()));
    assert_eq!(
        compile("user.missing.field or 1").unwrap().run(&ctx).unwrap(),
        Value::TRUE
    );
}

#[test]
fn substring_from_the_end() {
    assert_eq!(run("substr(\"foo\", -2, 2)"), Value::from("oo"));
}

#[test]
fn syntax_errors_carry_positions() {
    let source = "(1 +\n 2";
    let err = compile(source).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.line_col(source), Some((2, 3)));

    let source = "a # b";
    let err = compile(source).unwrap_err();
    assert_eq!(err.line_col(source), Some((1, 3)));
}

#[test]
fn numbers_keep_every_digit() {
    assert_eq!(run("2 ^ 100").to_string(), "1267650600228229401496703205376");
    assert_eq!(run("100000000000000000000000000000 > 1"), Value::TRUE);
    assert_eq!(
        run("79228162514264337593543950335 + 1").to_string(),
        "79228162514264337593543950336"
    );
    assert_eq!(
        run("0.1234567890123456789012345678901234 == 0.1234567890123456789012345678901235"),
        Value::FALSE
    );
    assert_eq!(
        run("0.1234567890123456789012345678901234 < 0.1234567890123456789012345678901235"),
        Value::TRUE
    );
}

#[test]
fn underscored_text_is_not_a_number() {
    let ctx = bind([("n", Value::from("1_000"))]);
    let err = compile("n + 1").unwrap().run(&ctx).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert string to decimal");
    assert_eq!(
        compile("n == 1000").unwrap().run(&ctx).unwrap(),
        Value::FALSE
    );
}

#[test]
fn float_bindings_use_their_shortest_form() {
    let ctx = bind([("a", Value::from(0.1)), ("b", Value::from(0.2))]);
    assert_eq!(compile("a + b == 0.3").unwrap().run(&ctx).unwrap(), Value::TRUE);
    let Value::Decimal(sum) = compile("a + b").unwrap().run(&ctx).unwrap() else {
        panic!("expected a decimal");
    };
    assert_eq!(format_decimal(&sum), "0.3");
}

fn bind<const N: usize>(pairs: [(&str, Value); N]) -> Context {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

proptest! {
    #[test]
    fn addition_is_exact(a in -1_000_000_i64..1_000_000, b in -1_000_000_i64..1_000_000) {
        let ctx = bind([("a", Value::from(a)), ("b", Value::from(b))]);
        let result = compile("a + b").unwrap().run(&ctx).unwrap();
        prop_assert_eq!(result, Value::from(a + b));
    }

    #[test]
    fn numeric_strings_compare_numerically(a in -10_000_i64..10_000, b in -10_000_i64..10_000) {
        let ctx = bind([("a", Value::from(a.to_string())), ("b", Value::from(b))]);
        let less = compile("a < b").unwrap().run_bool(&ctx).unwrap();
        prop_assert_eq!(less, a < b);
    }

    #[test]
    fn text_compares_lexically(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let ctx = bind([("a", Value::from(a.as_str())), ("b", Value::from(b.as_str()))]);
        let less = compile("a < b").unwrap().run_bool(&ctx).unwrap();
        prop_assert_eq!(less, a < b);
    }

    #[test]
    fn value_is_in_its_own_list(n in any::<i32>(), s in "[a-zA-Z0-9 ]{0,12}") {
        let ctx = bind([("n", Value::from(n)), ("s", Value::from(s.as_str()))]);
        prop_assert!(compile("n in [n] and s in [s] and [] in n").unwrap().run_bool(&ctx).unwrap());
    }

    #[test]
    fn inexact_membership_crosses_types(n in any::<i32>()) {
        let ctx = bind([("n", Value::from(n)), ("s", Value::from(n.to_string()))]);
        prop_assert!(compile("s in~ (n, 0)").unwrap().run_bool(&ctx).unwrap());
        prop_assert!(compile("s not in (n, \"x\")").unwrap().run_bool(&ctx).unwrap());
    }

    #[test]
    fn rounding_brackets_the_input(cents in -1_000_000_i64..1_000_000) {
        let d = BigDecimal::new(cents.into(), 2);
        let ctx = bind([("d", Value::from(d))]);
        let expr = compile("floor(d) <= d and d <= ceil(d) and abs(round(d) - d) <= 0.5").unwrap();
        prop_assert!(expr.run_bool(&ctx).unwrap());
    }
}
