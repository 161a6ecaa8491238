use std::fmt;

use derive_getters::Getters;


/// Classification of a scanned token. Carries no payload; decoded literals
/// travel alongside in a TokenValue.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Token {
    EndOfFile,
    Invalid,
    Newline,
    Whitespace,
    Symbol,
    Int,
    Float,
    String,
    LParen,
    RParen,
}

/// 1-based line and column.
#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq)]
pub struct Position {
    line: u32,
    col: u32,
}

/// Raw source text of a token plus its decoded payload.
///
/// Only the field matching the token's kind is meaningful.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct TokenValue {
    raw: String,
    int: i64,
    float: f64,
    string: String,
    pos: Position,
}


impl Token {
    pub fn name(&self) -> &'static str {
        match self {
            Token::EndOfFile => "end of file",
            Token::Invalid => "invalid token",
            Token::Newline => "newline",
            Token::Whitespace => "whitespace",
            Token::Symbol => "symbol",
            Token::Int => "int literal",
            Token::Float => "float literal",
            Token::String => "string literal",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl TokenValue {
    pub fn new<S: Into<String>>(raw: S, pos: Position) -> Self {
        Self {
            raw: raw.into(),
            pos,
            ..Default::default()
        }
    }

    pub fn with_int(mut self, int: i64) -> Self {
        self.int = int;
        self
    }

    pub fn with_float(mut self, float: f64) -> Self {
        self.float = float;
        self
    }

    pub fn with_string<S: Into<String>>(mut self, string: S) -> Self {
        self.string = string.into();
        self
    }
}


impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.raw, self.pos)
    }
}
