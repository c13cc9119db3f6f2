#![allow(clippy::unwrap_used, reason = "tests unwrap known-good results")]

use super::*;
use egg_eval::buffer_handler;
use pretty_assertions::assert_eq;

#[test]
fn parse_errors_are_syntax_errors() {
    let err = run_program(&["+(1, 2"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(matches!(err, Error::Parse(ParseError::ExpectedCommaOrParen { .. })));
    assert_eq!(err.to_string(), "syntax error: expected ',' or ')', found end of input");
}

#[test]
fn eval_errors_keep_their_kind_and_message() {
    let err = run_program(&["nope"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Reference);
    assert_eq!(err.to_string(), "undefined variable: nope");
}

#[test]
fn run_in_keeps_definitions() {
    let interp = Interpreter::builder().print_handler(buffer_handler()).build();
    let env = global_environment().child();
    run_in("define(x, 20)", &interp, &env).unwrap();
    assert_eq!(run_in("+(x, 1)", &interp, &env), Ok(Value::Number(21.0)));
}

#[test]
fn run_source_starts_from_a_fresh_scope() {
    let interp = Interpreter::builder().print_handler(buffer_handler()).build();
    run_source("define(x, 20)", &interp).unwrap();
    assert_eq!(
        run_source("x", &interp).map_err(|e| e.kind()),
        Err(ErrorKind::Reference)
    );
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
