#![allow(clippy::unwrap_used, reason = "tests unwrap known-good parses")]

use super::*;
use crate::{buffer_handler, global_environment, ErrorKind, EvalError};
use egg_ir::Name;
use pretty_assertions::assert_eq;

fn eval_with(interp: &Interpreter, src: &str) -> EvalResult {
    let expr = egg_parse::parse(src).unwrap();
    interp.evaluate(&expr, &global_environment().child())
}

fn eval(src: &str) -> EvalResult {
    eval_with(&Interpreter::builder().print_handler(buffer_handler()).build(), src)
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(eval("42"), Ok(Value::Number(42.0)));
    assert_eq!(eval("\"hi\""), Ok(Value::text("hi")));
}

#[test]
fn words_resolve_through_the_chain() {
    let env = global_environment().child();
    env.define(Name::new("x"), Value::Number(3.0));
    let interp = Interpreter::new();
    let expr = egg_parse::parse("+(x, true)").unwrap();
    // `true` resolves from the root; `+` then rejects it.
    assert_eq!(
        interp.evaluate(&expr, &env).map_err(|e| e.kind()),
        Err(ErrorKind::Type)
    );
    let expr = egg_parse::parse("x").unwrap();
    assert_eq!(interp.evaluate(&expr, &env), Ok(Value::Number(3.0)));
}

#[test]
fn unbound_word_is_a_reference_error() {
    assert_eq!(
        eval("nope"),
        Err(EvalError::UndefinedVariable {
            name: Name::new("nope")
        })
    );
}

#[test]
fn builtin_call() {
    assert_eq!(eval("+(2, *(3, 4))"), Ok(Value::Number(14.0)));
}

#[test]
fn applying_a_non_function_is_a_type_error() {
    let err = eval("5(1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "applying a non-function: number 5");
}

#[test]
fn callee_is_checked_before_arguments_run() {
    let interp = Interpreter::builder().print_handler(buffer_handler()).build();
    let err = eval_with(&interp, "5(print(\"side effect\"))").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(interp.print_handler().get_output(), "");
}

#[test]
fn arguments_evaluate_left_to_right() {
    let interp = Interpreter::builder().print_handler(buffer_handler()).build();
    eval_with(&interp, "array(print(1), print(2), print(3))").unwrap();
    assert_eq!(interp.print_handler().get_output(), "1\n2\n3\n");
}

#[test]
fn builtin_arity_is_checked() {
    assert_eq!(
        eval("+(1)"),
        Err(EvalError::ArityMismatch {
            callee: "<native +>".to_string(),
            expected: 2,
            got: 1
        })
    );
    assert_eq!(eval("length()").map_err(|e| e.kind()), Err(ErrorKind::Type));
}

#[test]
fn function_arity_is_checked() {
    let err = eval("fun(a, b, a)(1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err.to_string(),
        "<function(a, b)> expects 2 argument(s), got 1"
    );
}

#[test]
fn closures_capture_the_defining_scope() {
    assert_eq!(
        eval("do(define(f, fun(a, fun(b, +(a, b)))), f(4)(5))"),
        Ok(Value::Number(9.0))
    );
}

#[test]
fn each_call_gets_its_own_frame() {
    let src = "do(
        define(counter, fun(do(define(n, 0), fun(do(set(n, +(n, 1)), n))))),
        define(a, counter()),
        define(b, counter()),
        a(), a(), b(),
        array(a(), b())
    )";
    assert_eq!(
        eval(src),
        Ok(Value::array(vec![Value::Number(3.0), Value::Number(2.0)]))
    );
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_eq!(
        eval("do(define(x, 1), define(f, fun(x, x)), array(f(2), x))"),
        Ok(Value::array(vec![Value::Number(2.0), Value::Number(1.0)]))
    );
}

#[test]
fn recursion() {
    let src = "do(
        define(fact, fun(n, if(<(n, 2), 1, *(n, fact(-(n, 1)))))),
        fact(10)
    )";
    assert_eq!(eval(src), Ok(Value::Number(3_628_800.0)));
}

#[test]
fn deep_recursion_does_not_overflow() {
    let src = "do(
        define(count, fun(n, if(==(n, 0), 0, +(1, count(-(n, 1)))))),
        count(20000)
    )";
    assert_eq!(eval(src), Ok(Value::Number(20_000.0)));
}

#[test]
fn apply_rejects_non_callables_directly() {
    let interp = Interpreter::new();
    assert_eq!(
        interp
            .apply(&Value::Bool(true), vec![])
            .map_err(|e| e.kind()),
        Err(ErrorKind::Type)
    );
}

#[test]
fn free_evaluate_uses_a_default_interpreter() {
    let expr = egg_parse::parse("-(10, 4)").unwrap();
    assert_eq!(
        evaluate(&expr, &global_environment()),
        Ok(Value::Number(6.0))
    );
}
