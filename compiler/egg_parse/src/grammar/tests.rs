#![allow(clippy::unwrap_used, reason = "tests unwrap successful parses")]

use crate::{parse, ParseError};
use egg_ir::Expression;
use pretty_assertions::assert_eq;

fn word(name: &str) -> Expression {
    Expression::word(name)
}

fn num(n: f64) -> Expression {
    Expression::number(n)
}

fn apply(operator: Expression, args: Vec<Expression>) -> Expression {
    Expression::apply(operator, args)
}

// ─── Primaries ─────────────────────────────────────────────────

#[test]
fn parses_literals_and_words() {
    assert_eq!(parse("42").unwrap(), num(42.0));
    assert_eq!(parse("\"hi\"").unwrap(), Expression::text("hi"));
    assert_eq!(parse("total").unwrap(), word("total"));
    assert_eq!(parse("12abc").unwrap(), word("12abc"));
}

#[test]
fn surrounding_separators_are_ignored() {
    assert_eq!(parse("  \n x \n # trailing comment").unwrap(), word("x"));
}

#[test]
fn comments_are_transparent() {
    assert_eq!(parse("# hello\nx").unwrap(), parse("x").unwrap());
}

// ─── Applications ──────────────────────────────────────────────

#[test]
fn parses_application() {
    assert_eq!(
        parse("+(a, 10)").unwrap(),
        apply(word("+"), vec![word("a"), num(10.0)])
    );
}

#[test]
fn parses_empty_argument_list() {
    assert_eq!(parse("do()").unwrap(), apply(word("do"), vec![]));
    assert_eq!(parse("do( # nothing\n )").unwrap(), apply(word("do"), vec![]));
}

#[test]
fn parses_nested_application() {
    assert_eq!(
        parse("if(<(x, 1), print(\"small\"), x)").unwrap(),
        apply(
            word("if"),
            vec![
                apply(word("<"), vec![word("x"), num(1.0)]),
                apply(word("print"), vec![Expression::text("small")]),
                word("x"),
            ]
        )
    );
}

#[test]
fn parses_chained_application() {
    assert_eq!(
        parse("f(4)(5)").unwrap(),
        apply(apply(word("f"), vec![num(4.0)]), vec![num(5.0)])
    );
}

#[test]
fn separators_may_precede_argument_lists() {
    assert_eq!(
        parse("f (1) # apply again\n (2)").unwrap(),
        apply(apply(word("f"), vec![num(1.0)]), vec![num(2.0)])
    );
}

#[test]
fn literal_operators_parse_as_applications() {
    // Rejected at evaluation time, not at parse time.
    assert_eq!(parse("1(2)").unwrap(), apply(num(1.0), vec![num(2.0)]));
}

#[test]
fn trailing_comma_closes_the_list() {
    assert_eq!(parse("f(1,)").unwrap(), apply(word("f"), vec![num(1.0)]));
}

#[test]
fn comments_between_arguments() {
    let source = "do(define(x, 1), # bind\n  print(x) # show\n)";
    assert_eq!(
        parse(source).unwrap(),
        apply(
            word("do"),
            vec![
                apply(word("define"), vec![word("x"), num(1.0)]),
                apply(word("print"), vec![word("x")]),
            ]
        )
    );
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn rejects_trailing_text() {
    assert_eq!(
        parse("x y").unwrap_err(),
        ParseError::UnexpectedTrailingText {
            found: "`y`".to_string()
        }
    );
    assert!(matches!(
        parse("1.5"),
        Err(ParseError::ExpectedCommaOrParen { .. } | ParseError::UnexpectedTrailingText { .. })
    ));
}

#[test]
fn rejects_unbalanced_close_paren() {
    assert!(matches!(
        parse("f(1))"),
        Err(ParseError::UnexpectedTrailingText { .. })
    ));
}

#[test]
fn rejects_missing_separator_between_arguments() {
    assert_eq!(
        parse("f(1 2)").unwrap_err(),
        ParseError::ExpectedCommaOrParen {
            found: "`2)`".to_string()
        }
    );
}

#[test]
fn rejects_unclosed_argument_list() {
    assert_eq!(
        parse("f(1").unwrap_err(),
        ParseError::ExpectedCommaOrParen {
            found: "end of input".to_string()
        }
    );
    assert_eq!(
        parse("f(").unwrap_err(),
        ParseError::UnexpectedInput {
            found: "end of input".to_string()
        }
    );
}

#[test]
fn rejects_input_no_rule_matches() {
    for source in ["", "   # only a comment", ")", "\"open", "f(,)"] {
        assert!(
            matches!(parse(source), Err(ParseError::UnexpectedInput { .. })),
            "{source:?}"
        );
    }
}

#[test]
fn error_messages_name_the_offending_text() {
    let err = parse("f(1 oops)").unwrap_err();
    assert_eq!(err.to_string(), "expected ',' or ')', found `oops)`");
    assert_eq!(err.found(), "`oops)`");
}

#[test]
fn deeply_nested_source_does_not_overflow() {
    let depth = 200_000;
    let source = format!("{}x{}", "f(".repeat(depth), ")".repeat(depth));
    let expr = parse(&source).unwrap();
    assert_eq!(expr.to_string(), source);
    drop(expr);
}

#[test]
fn deep_tree_survives_a_shared_subtree() {
    let depth = 100_000;
    let source = format!("{}x{}", "f(".repeat(depth), ")".repeat(depth));
    let expr = parse(&source).unwrap();
    let Expression::Apply { args, .. } = &expr else {
        panic!("expected an application, got {expr:?}");
    };
    let inner = args[0].clone();
    drop(expr);
    assert_eq!(inner.to_string().len(), source.len() - 3);
    assert_eq!(inner, parse(&source[2..source.len() - 1]).unwrap());
}

#[test]
fn long_application_chain_parses_with_tracing_enabled() {
    let source = format!("f{}", "(x)".repeat(20_000));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::sink)
        .finish();
    let expr = tracing::subscriber::with_default(subscriber, || parse(&source)).unwrap();
    assert_eq!(expr.to_string(), source);
}

// ─── Properties ────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn expression() -> impl Strategy<Value = Expression> {
        let leaf = prop_oneof![
            (0u32..100_000).prop_map(|n| Expression::number(f64::from(n))),
            "[a-z ,()#]{0,8}".prop_map(|s| Expression::text(&s)),
            "[a-z+*<>=/-][a-z0-9_]{0,4}".prop_map(|s| Expression::word(&s)),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            (inner.clone(), prop::collection::vec(inner, 0..4))
                .prop_map(|(operator, args)| Expression::apply(operator, args))
        })
    }

    proptest! {
        #[test]
        fn display_round_trips(expr in expression()) {
            prop_assert_eq!(parse(&expr.to_string()).unwrap(), expr);
        }

        #[test]
        fn leading_comments_are_transparent(expr in expression(), comment in "[ -~]{0,20}") {
            let source = expr.to_string();
            let commented = format!("#{comment}\n{source}");
            prop_assert_eq!(parse(&commented).unwrap(), parse(&source).unwrap());
        }

        #[test]
        fn digit_runs_parse_as_numbers(n in 0u64..1_000_000_000) {
            prop_assert_eq!(parse(&n.to_string()).unwrap(), Expression::number(n as f64));
        }
    }
}
