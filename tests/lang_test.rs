mod common;

use std::convert::TryFrom;

use conslisp::list;
use conslisp::parser::parse;
use conslisp::primitive::{Atom, AtomValue, Symbol};
use conslisp::sexp::{Cons, Sexp};
use conslisp::token::Token;


#[test]
fn basic_arithmetic() {
    let mut interpreter = common::setup();

    let results = common::results(&mut interpreter, "(+ 1 2) (+ 2 2)");
    assert_eq!(results, vec![Sexp::from(3i64), Sexp::from(4i64)]);
    assert_eq!(results[0].to_string(), "3");

    let results = common::results(&mut interpreter, "(+ (+ 1 1) 3)\n(+ 1.4 5.0)");
    assert_eq!(results, vec![Sexp::from(5i64), Sexp::from(6.4)]);
    assert_eq!(results[1].to_string(), "6.4");

    let atom = <&Atom>::try_from(&results[1]).unwrap();
    assert_eq!(atom.kind(), Token::Float);
}

#[test]
fn addition_type_rules() {
    let mut interpreter = common::setup();
    let results = common::results_with_errors(
        &mut interpreter,
        "(+ 1 2.5)
         (+ \"a\" \"b\")
         (+ 2.5 2.5)",
    );
    assert_eq!(
        common::error_kind(results[0].as_ref().unwrap_err()),
        ("EvalError".to_string(), "TypeMismatch".to_string())
    );
    assert_eq!(
        common::error_kind(results[1].as_ref().unwrap_err()),
        ("EvalError".to_string(), "InvalidArgument".to_string())
    );
    assert_eq!(results[2].as_ref().unwrap(), &vec![Sexp::from(5.0)]);
}

#[test]
fn binding_round_trip() {
    let mut interpreter = common::setup();
    let results = common::results(&mut interpreter, "(setq a 5)\na\n(setq b (+ a a))\nb");
    assert_eq!(
        results,
        vec![
            Sexp::from(5i64),
            Sexp::from(5i64),
            Sexp::from(10i64),
            Sexp::from(10i64)
        ]
    );
}

#[test]
fn bindings_persist_across_units() {
    let mut interpreter = common::setup();
    interpreter.interpret("(setq greeting \"hello\")").unwrap();
    assert_eq!(
        interpreter.interpret("(list greeting greeting)").unwrap(),
        vec![list!("hello", "hello")]
    );
}

#[test]
fn unbound_symbol() {
    let mut interpreter = common::setup();
    let err = interpreter.interpret("unbound").unwrap_err();
    assert_eq!(
        common::error_kind(&err),
        ("EvalError".to_string(), "UnboundSymbol".to_string())
    );
}

#[test]
fn list_construction_order() {
    let mut interpreter = common::setup();
    let results = common::results(&mut interpreter, "(setq c 3)\n(list 1 (+ 1 1) c)");
    let expected = Sexp::from(Cons::new(
        Sexp::from(1i64),
        Cons::new(Sexp::from(2i64), Cons::new(Sexp::from(3i64), Sexp::Nil)),
    ));
    assert_eq!(results[1], expected);
    assert_eq!(
        common::results(&mut interpreter, "(first (list 9 8))"),
        vec![Sexp::from(9i64)]
    );
}

#[test]
fn parse_without_eval() {
    let sexps = parse("(list 1 9 1)").unwrap();
    assert_eq!(
        format!("{:?}", sexps[0]),
        "(cons list (cons 1 (cons 9 (cons 1 nil))))"
    );
    assert_eq!(
        sexps[0],
        list!(Symbol::new("list"), 1i64, 9i64, 1i64)
    );

    let sexps = parse("()").unwrap();
    assert_eq!(sexps, vec![Sexp::Nil]);
    assert_eq!(sexps[0].to_string(), "nil");
}

#[test]
fn empty_list_evaluates_to_nil() {
    let mut interpreter = common::setup();
    assert_eq!(common::results(&mut interpreter, "()"), vec![Sexp::Nil]);
}

#[test]
fn parenthesis_balance() {
    let mut interpreter = common::setup();
    let results = common::results_with_errors(&mut interpreter, "(1 2\n(+ 1 2))\n((+ 1 2)");
    assert_eq!(
        common::error_kind(results[0].as_ref().unwrap_err()),
        ("ParseError".to_string(), "UnmatchedOpen".to_string())
    );
    assert_eq!(
        common::error_kind(results[1].as_ref().unwrap_err()),
        ("ScanError".to_string(), "UnmatchedClose".to_string())
    );
    assert_eq!(
        common::error_kind(results[2].as_ref().unwrap_err()),
        ("ParseError".to_string(), "UnmatchedOpen".to_string())
    );
}

#[test]
fn error_display() {
    let mut interpreter = common::setup();
    let err = interpreter.interpret("(1 2").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"( "ParseError" "UnmatchedOpen" "parenthesis missing @ (1, 1)" )"#
    );
}

#[test]
fn strings_and_escapes() {
    let mut interpreter = common::setup();
    let results = common::results(&mut interpreter, r#"(setq s "a\tb\x21")"#);
    let atom = <&Atom>::try_from(&results[0]).unwrap();
    assert_eq!(atom.value(), &AtomValue::String("a\tb!".to_string()));
    assert_eq!(results[0].to_string(), r#""a\tb!""#);
}

#[test]
fn first_error_stops_unit() {
    let mut interpreter = common::setup();
    let results = common::results_with_errors(
        &mut interpreter,
        "(setq x 1) (setq x nope) (setq x 3)\nx",
    );
    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap(), &vec![Sexp::from(1i64)]);
}

#[test]
fn print_evaluates_all_args() {
    let mut interpreter = common::setup();
    let results = common::results_with_errors(&mut interpreter, "(print 1 (setq p 2))\np");
    assert_eq!(results[0].as_ref().unwrap(), &vec![Sexp::Nil]);
    assert_eq!(results[1].as_ref().unwrap(), &vec![Sexp::from(2i64)]);
}

#[test]
fn self_nesting_is_bounded() {
    let mut interpreter = common::setup();
    common::results(&mut interpreter, "(setq a 1)");
    let mut results = Vec::new();
    for _ in 0..200 {
        results.push(interpreter.interpret("(setq a (list a))"));
    }
    let failed = results.iter().position(|result| result.is_err()).unwrap();
    assert_eq!(failed, conslisp::builtins::MAX_LIST_DEPTH);
    assert_eq!(
        common::error_kind(results[failed].as_ref().unwrap_err()),
        ("EvalError".to_string(), "DepthOverflow".to_string())
    );

    let a = &common::results(&mut interpreter, "a")[0];
    assert_eq!(a.nesting_depth(), conslisp::builtins::MAX_LIST_DEPTH);
    assert!(a.readable().to_string().starts_with("( ( ( "));
}
