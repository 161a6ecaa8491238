use super::*;

use Token::*;


fn kinds(input: &str) -> Vec<Token> {
    Scanner::new(input)
        .map(|result| result.unwrap().1)
        .collect::<Vec<_>>()
}

fn single(input: &str) -> (TokenValue, Token) {
    Scanner::new(input).next_token().unwrap()
}

fn scan_err(input: &str) -> Error {
    for result in Scanner::new(input) {
        if let Err(err) = result {
            return err;
        }
    }
    panic!("{:?} scanned without error", input);
}

fn reason_name(err: &Error) -> std::string::String {
    let reified = err.kind().reify();
    let mut iter = reified.iter();
    iter.next();
    iter.next().unwrap().0.to_string()
}


#[test]
fn call_form() {
    assert_eq!(
        kinds("(+ 1 2)"),
        vec![LParen, Symbol, Whitespace, Int, Whitespace, Int, RParen, EndOfFile]
    );
}

#[test]
fn nested() {
    assert_eq!(
        kinds("(a (b (c)))"),
        vec![
            LParen, Symbol, Whitespace, LParen, Symbol, Whitespace, LParen, Symbol, RParen,
            RParen, RParen, EndOfFile
        ]
    );
}

#[test]
fn newlines() {
    assert_eq!(
        kinds("a\nb\r\n"),
        vec![Symbol, Newline, Symbol, Newline, Newline, EndOfFile]
    );
}

#[test]
fn empty() {
    assert_eq!(kinds(""), vec![EndOfFile]);
    assert_eq!(kinds("   "), vec![Whitespace, Whitespace, Whitespace, EndOfFile]);
}

#[test]
fn symbols() {
    for input in &[
        "x", "setq", "+", "list-of", "a1", "_tmp", "<=", "...", "λ", "b^2-4*a*c", "+1", "+$",
    ] {
        let (value, token) = single(input);
        assert_eq!(token, Symbol, "{}", input);
        assert_eq!(value.raw(), input);
    }
}

#[test]
fn ints() {
    let cases: &[(&str, i64)] = &[
        ("0", 0),
        ("7", 7),
        ("128", 128),
        ("0x1F", 31),
        ("0XfF", 255),
        ("0o17", 15),
        ("0b101", 5),
        ("017", 15),
        ("0x_ff_ff", 65535),
        ("9223372036854775807", i64::MAX),
    ];
    for (input, expected) in cases {
        let (value, token) = single(input);
        assert_eq!(token, Int, "{}", input);
        assert_eq!(*value.int(), *expected, "{}", input);
        assert_eq!(value.raw(), input);
    }
}

#[test]
fn floats() {
    let cases: &[(&str, f64)] = &[
        ("1.4", 1.4),
        ("5.0", 5.0),
        ("0.5", 0.5),
        (".5", 0.5),
        ("1.", 1.0),
        ("1e3", 1000.0),
        ("2.5E-2", 0.025),
        ("6e+1", 60.0),
        (".1e+1", 1.0),
    ];
    for (input, expected) in cases {
        let (value, token) = single(input);
        assert_eq!(token, Float, "{}", input);
        assert_eq!(*value.float(), *expected, "{}", input);
    }
}

#[test]
fn number_then_symbol() {
    assert_eq!(kinds("12ab"), vec![Int, Symbol, EndOfFile]);
    // '.' only starts a number before a digit.
    assert_eq!(kinds(".x"), vec![Symbol, EndOfFile]);
}

#[test]
fn strings() {
    let cases: &[(&str, &str)] = &[
        (r#""""#, ""),
        (r#""abc""#, "abc"),
        (r#""a b""#, "a b"),
        (r#""tab\there""#, "tab\there"),
        (r#""quote\"d""#, "quote\"d"),
        (r#""back\\slash""#, "back\\slash"),
        (r#""\x41\101é""#, "AAé"),
        (r#""\U0001F600""#, "\u{1F600}"),
    ];
    for (input, expected) in cases {
        let (value, token) = single(input);
        assert_eq!(token, String, "{}", input);
        assert_eq!(value.string(), expected);
        assert_eq!(value.raw(), input);
    }
}

#[test]
fn invalid_chars() {
    assert_eq!(kinds("#"), vec![Invalid, EndOfFile]);
    assert_eq!(kinds("'a"), vec![Invalid, Symbol, EndOfFile]);
}

#[test]
fn positions() {
    let values = Scanner::new("(a\n  bc)")
        .map(|result| result.unwrap().0)
        .collect::<Vec<_>>();
    let positions = values.iter().map(|v| *v.pos()).collect::<Vec<_>>();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(1, 3),
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(2, 3),
            Position::new(2, 5),
            Position::new(2, 6),
        ]
    );
}

#[test]
fn depth_tracking() {
    let mut scanner = Scanner::new("((a) b");
    while let Ok((_, token)) = scanner.next_token() {
        if token == EndOfFile {
            break;
        }
    }
    assert_eq!(scanner.depth(), 1);

    let mut scanner = Scanner::new("((a) (b))");
    for result in &mut scanner {
        result.unwrap();
    }
    assert_eq!(scanner.depth(), 0);
}

#[test]
fn unmatched_close() {
    let err = scan_err("(a))");
    assert_eq!(reason_name(&err), "\"UnmatchedClose\"");
    assert_eq!(
        err.to_string(),
        r#"( "ScanError" "UnmatchedClose" "parenthesis missing @ (1, 4)" )"#
    );
    assert_eq!(reason_name(&scan_err(")")), "\"UnmatchedClose\"");
}

#[test]
fn malformed_numbers() {
    for input in &["1e", "1e+", "2.5E-", "08", "0x", "0b102", "99999999999999999999"] {
        assert_eq!(
            reason_name(&scan_err(input)),
            "\"MalformedNumber\"",
            "{}",
            input
        );
    }
}

#[test]
fn unterminated_string() {
    assert_eq!(reason_name(&scan_err("\"abc")), "\"UnterminatedString\"");
    assert_eq!(reason_name(&scan_err("\"abc\\")), "\"UnterminatedString\"");
}

#[test]
fn invalid_escape() {
    for input in &[r#""\q""#, r#""\x4""#, r#""\777""#, r#""\uD800""#, r#""a\'b""#] {
        assert_eq!(
            reason_name(&scan_err(input)),
            "\"InvalidEscape\"",
            "{}",
            input
        );
    }
}

#[test]
fn stops_after_error() {
    let results = Scanner::new("a ) b").collect::<Vec<_>>();
    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
}
