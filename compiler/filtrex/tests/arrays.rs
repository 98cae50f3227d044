//! Lists, membership and set built-ins.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::str::FromStr;

use filtrex::{compile, BigDecimal, Context, Value, ValueKind};
use pretty_assertions::assert_eq;

fn run_in(source: &str, ctx: &Context) -> Value {
    compile(source).unwrap().run(ctx).unwrap()
}

fn with_foo(foo: Value) -> Context {
    let mut ctx = Context::default();
    ctx.insert("foo".into(), foo);
    ctx
}

#[track_caller]
fn pass_in(source: &str, ctx: &Context) {
    assert_eq!(run_in(source, ctx), Value::TRUE, "{source}");
}

#[track_caller]
fn fails_in(source: &str, ctx: &Context) {
    assert_eq!(run_in(source, ctx), Value::FALSE, "{source}");
}

#[track_caller]
fn pass(source: &str) {
    pass_in(source, &Context::default());
}

#[track_caller]
fn fails(source: &str) {
    fails_in(source, &Context::default());
}

fn numbers(items: &[i32]) -> Value {
    items.iter().map(|&n| Value::from(n)).collect()
}

#[test]
fn in_and_not_in() {
    fails("5 in (1, 2, 3, 4)");
    pass("3 in (1, 2, 3, 4)");
    pass("5 not in (1, 2, 3, 4)");
    fails("3 not in (1, 2, 3, 4)");
}

#[test]
fn array_in_array_is_a_subset_test() {
    pass("(1, 2) in (1, 2, 3)");
    pass("(1, 2) in (2, 3, 1)");
    fails("(3, 4) in (1, 2, 3)");
    fails("(1, 2) not in (1, 2, 3)");
    fails("(1, 2) not in (2, 3, 1)");
    pass("(3, 4) not in (1, 2, 3)");
    pass("[] in (1, 2)");
}

#[test]
fn scalars_act_as_single_element_lists() {
    fails("(1, 2) in 1");
    pass("1 in 1");
    pass("(1, 2) not in 1");
    fails("1 not in 1");
}

#[test]
fn strings() {
    pass_in("foo == \"hello\"", &with_foo(Value::from("hello")));
    fails_in("foo == \"hello\"", &with_foo(Value::from("bye")));
    fails_in("foo != \"hello\"", &with_foo(Value::from("hello")));
    pass_in("foo != \"hello\"", &with_foo(Value::from("bye")));
    pass_in("foo in (\"aa\", \"bb\")", &with_foo(Value::from("aa")));
    fails_in("foo in (\"aa\", \"bb\")", &with_foo(Value::from("cc")));
    fails_in("foo not in (\"aa\", \"bb\")", &with_foo(Value::from("aa")));
    pass_in("foo not in (\"aa\", \"bb\")", &with_foo(Value::from("cc")));
    pass("\"foo\" in (\"foo\", \"bar\")");
}

#[test]
fn string_literals_keep_raw_content() {
    let ctx = Context::default();
    assert_eq!(run_in("\"\n\"", &ctx), Value::from("\n"));
    assert_eq!(run_in("\"\u{0}\"", &ctx), Value::from("\u{0}"));
    assert_eq!(run_in(r#""a\"b""#, &ctx), Value::from(r#"a\"b"#));
}

#[test]
fn mixed_array_literal() {
    let pi = BigDecimal::from_str("3.141592653589793").unwrap();
    let mut ctx = Context::default();
    ctx.insert("pi".into(), Value::from(pi.clone()));

    let Value::Array(items) = run_in("(42, \"fifty\", pi)", &ctx) else {
        panic!("expected an array");
    };
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind(), ValueKind::Decimal);
    assert_eq!(items[0], Value::from(42));
    assert_eq!(items[1].kind(), ValueKind::String);
    assert_eq!(items[1].as_string().unwrap(), "fifty");
    assert_eq!(items[2], Value::from(pi));
}

#[test]
fn exact_and_inexact_inclusion() {
    fails_in("1 in foo", &with_foo(numbers(&[])));
    fails_in("1 in foo", &with_foo(numbers(&[0, 2, 3])));
    pass_in("1 in foo", &with_foo(numbers(&[6, 1, 3])));

    let with_text_one = || with_foo(Value::array([Value::from(6), Value::from("1"), Value::from(3)]));
    fails_in("1 in foo", &with_text_one());
    pass_in("1 in~ foo", &with_text_one());
    pass_in("1 in~ foo", &with_foo(numbers(&[6, 1, 3])));

    fails_in("1 not in~ foo", &with_text_one());
    fails_in("1 not in~ foo", &with_foo(numbers(&[6, 1, 3])));
    pass_in("1 not in~ foo", &with_foo(numbers(&[6, 3])));
}

#[test]
fn set_functions() {
    pass("[1, 2, 3, 4] in union([1, 2], [3, 4])");
    pass("[1, 2, 3, 4] in union([1, 2], [2, 3, 4])");
    pass("[1, 2] in intersection([1, 2, 3, 4], [1, 2], [1, 2])");

    pass("[1, 2, 3, 4] in union([1], 2, [3, 4])");
    pass("1 in intersection([1], [1, 2], 1, [3, 4, 1])");
    pass("length(intersection([1], [1, 2], 1, [3, 4, 1])) == 1");

    pass("[1, 2] in difference([1, 2, 3, 4], [4, 3])");
    pass("[3, 4] not in difference([1, 2, 3, 4], [4, 3])");

    pass("1 in unique([1, 1, 1])");
    pass("length(unique([1, 1, 1])) == 1");
}

#[test]
fn union_preserves_order() {
    assert_eq!(
        run_in("union([3, 1], [1, 2], 3)", &Context::default()),
        numbers(&[3, 1, 2])
    );
}
