use std::convert::TryFrom;

use super::*;


#[test]
fn kind_follows_value() {
    assert_eq!(Atom::int(3).kind(), Token::Int);
    assert_eq!(Atom::float(3.).kind(), Token::Float);
    assert_eq!(Atom::string("3").kind(), Token::String);
}

#[test]
fn raw_ignored_by_eq() {
    let parsed = Atom::new("0x10", AtomValue::Int(16));
    assert_eq!(parsed, Atom::int(16));
    assert_eq!(parsed.raw(), "0x10");
    assert_ne!(Atom::int(1), Atom::float(1.));
}

#[test]
fn int_display() {
    assert_eq!(Atom::int(3).to_string(), "3");
    assert_eq!(Atom::int(-42).to_string(), "-42");
}

#[test]
fn string_display() {
    assert_eq!(Atom::string("abc").to_string(), "\"abc\"");
    assert_eq!(Atom::string("a\"b\n").to_string(), "\"a\\\"b\\n\"");
}

#[test]
fn float_display() {
    let cases: &[(f64, &str)] = &[
        (6.4, "6.4"),
        (1.4 + 5.0, "6.4"),
        (5.0, "5"),
        (0.1 + 0.2, "0.30000000000000004"),
        (-2.5, "-2.5"),
        (0.0, "0"),
        (123456.0, "123456"),
        (1000000.0, "1e+06"),
        (1.5e10, "1.5e+10"),
        (0.0001, "0.0001"),
        (0.00001, "1e-05"),
        (-2.5e-7, "-2.5e-07"),
        (1e100, "1e+100"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "+Inf"),
        (f64::NEG_INFINITY, "-Inf"),
    ];
    for (val, expected) in cases {
        assert_eq!(Atom::float(*val).to_string(), *expected, "{:?}", val);
    }
}

#[test]
fn consume() {
    assert_eq!(Atom::string("x").consume(), AtomValue::String("x".to_string()));
}

#[test]
fn try_from_sexp() {
    let sexp = Sexp::from(7i64);
    assert_eq!(<&Atom>::try_from(&sexp).unwrap(), &Atom::int(7));
    assert!(<&Atom>::try_from(&Sexp::Nil).is_err());
    assert_eq!(Atom::try_from(sexp).unwrap().consume(), AtomValue::Int(7));
}
