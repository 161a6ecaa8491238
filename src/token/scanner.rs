//! Module for breaking source text into classified tokens.

use lazy_static::lazy_static;
use log::{trace, warn};
use regex::Regex;

use super::token::{Position, Token, TokenValue};
use crate::error::{Error, ErrorKind};
use crate::sexp::Sexp;

use self::ScanErrorReason::*;


/// Cursor over source text producing one (TokenValue, Token) per call.
///
/// Tracks paren nesting so that an unmatched ')' fails immediately; an
/// unmatched '(' is left for the parser to report at end of input.
pub struct Scanner<'a> {
    rest: &'a str,
    pos: Position,
    depth: usize,
    done: bool,
}

#[derive(Debug)]
pub struct ScanError {
    reason: ScanErrorReason,
    pos: Position,
}

#[derive(Debug)]
pub enum ScanErrorReason {
    UnmatchedClose,
    MalformedNumber(String),
    UnterminatedString,
    InvalidEscape(String),
}


impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            pos: Position::default(),
            depth: 0,
            done: false,
        }
    }

    /// Number of currently-unclosed '('.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn next_token(&mut self) -> Result<(TokenValue, Token), Error> {
        let start = self.rest;
        let pos = self.pos;

        let c = match self.peek() {
            Some(c) => c,
            None => return Ok((TokenValue::new("", pos), Token::EndOfFile)),
        };

        let token = match c {
            '(' => {
                self.depth += 1;
                self.bump();
                Token::LParen
            }
            ')' => {
                if self.depth == 0 {
                    return err!(ScanError::new(UnmatchedClose, pos));
                }
                self.depth -= 1;
                self.bump();
                Token::RParen
            }
            '\n' => {
                self.bump();
                Token::Newline
            }
            ' ' | '\t' => {
                self.bump();
                Token::Whitespace
            }
            '"' => return self.scan_string(start, pos),
            c if c.is_ascii_digit() || (c == '.' && self.peek_second_is_digit()) => {
                return self.scan_number(start, pos);
            }
            c if is_symbol_start(c) => {
                while let Some(c) = self.peek() {
                    if !is_symbol(c) {
                        break;
                    }
                    self.bump();
                }
                Token::Symbol
            }
            _ => {
                self.bump();
                warn!("Invalid token {:?} @ {}", c, pos);
                Token::Invalid
            }
        };

        let value = TokenValue::new(self.raw_since(start), pos);
        trace!("{:?} {}", token, value);
        Ok((value, token))
    }


    fn peek(&self) -> Option<char> {
        self.rest
            .chars()
            .next()
            .map(|c| if c == '\r' { '\n' } else { c })
    }

    fn peek_second_is_digit(&self) -> bool {
        let mut chars = self.rest.chars();
        chars.next();
        chars.next().map_or(false, |c| c.is_ascii_digit())
    }

    fn bump(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();

        if c == '\r' || c == '\n' {
            self.pos = Position::new(self.pos.line() + 1, 1);
            Some('\n')
        } else {
            self.pos = Position::new(*self.pos.line(), self.pos.col() + 1);
            Some(c)
        }
    }

    fn skip_digits(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump();
        }
    }

    fn raw_since(&self, start: &'a str) -> &'a str {
        &start[..start.len() - self.rest.len()]
    }

    fn scan_string(
        &mut self,
        start: &'a str,
        pos: Position,
    ) -> Result<(TokenValue, Token), Error> {
        self.bump(); // Opening quote.
        loop {
            match self.bump() {
                None => return err!(ScanError::new(UnterminatedString, pos)),
                Some('"') => break,
                // Escapes are kept verbatim until the whole literal is known.
                Some('\\') => {
                    if self.bump().is_none() {
                        return err!(ScanError::new(UnterminatedString, pos));
                    }
                }
                Some(_) => {}
            }
        }

        let raw = self.raw_since(start);
        let string = match unquote(raw) {
            Ok(string) => string,
            Err(escape) => return err!(ScanError::new(InvalidEscape(escape), pos)),
        };
        let value = TokenValue::new(raw, pos).with_string(string);
        trace!("{:?} {}", Token::String, value);
        Ok((value, Token::String))
    }

    fn scan_number(
        &mut self,
        start: &'a str,
        pos: Position,
    ) -> Result<(TokenValue, Token), Error> {
        let mut fraction = false;
        let mut exponent = false;

        if self.peek() == Some('.') {
            self.bump();
            fraction = true;
            self.skip_digits();
        } else {
            if self.rest.starts_with('0') && self.peek_radix_prefix() {
                self.bump();
                self.bump();
                while let Some(c) = self.peek() {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    self.bump();
                }
                return self.finish_int(start, pos);
            }

            self.skip_digits();
            if self.peek() == Some('.') {
                self.bump();
                fraction = true;
                self.skip_digits();
            }
        }

        if let Some('e') | Some('E') = self.peek() {
            self.bump();
            exponent = true;
            if let Some('+') | Some('-') = self.peek() {
                self.bump();
            }
            if !self.peek().map_or(false, |c| c.is_ascii_digit()) {
                let raw = self.raw_since(start).to_string();
                return err!(ScanError::new(MalformedNumber(raw), pos));
            }
            self.skip_digits();
        }

        if !fraction && !exponent {
            return self.finish_int(start, pos);
        }

        let raw = self.raw_since(start);
        match raw.parse::<f64>() {
            Ok(float) => {
                let value = TokenValue::new(raw, pos).with_float(float);
                trace!("{:?} {}", Token::Float, value);
                Ok((value, Token::Float))
            }
            Err(_) => err!(ScanError::new(MalformedNumber(raw.to_string()), pos)),
        }
    }

    fn peek_radix_prefix(&self) -> bool {
        let mut chars = self.rest.chars();
        chars.next();
        matches!(
            chars.next(),
            Some('x') | Some('X') | Some('o') | Some('O') | Some('b') | Some('B')
        )
    }

    fn finish_int(&mut self, start: &'a str, pos: Position) -> Result<(TokenValue, Token), Error> {
        let raw = self.raw_since(start);
        match parse_int(raw) {
            Some(int) => {
                let value = TokenValue::new(raw, pos).with_int(int);
                trace!("{:?} {}", Token::Int, value);
                Ok((value, Token::Int))
            }
            None => err!(ScanError::new(MalformedNumber(raw.to_string()), pos)),
        }
    }
}


impl<'a> Iterator for Scanner<'a> {
    type Item = Result<(TokenValue, Token), Error>;

    /// Yields every token up to and including EndOfFile, or up to the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok((_, Token::EndOfFile)) | Err(_) => self.done = true,
            _ => {}
        }
        Some(result)
    }
}


pub fn is_symbol_start(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '@' | '$' | '%' | '^' | '&' | '_' | '=' | '<' | '>' | '~' | '.'
    ) || c.is_alphabetic()
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii_digit() || is_symbol_start(c)
}

/// Integer literal with base auto-detection: 0x/0o/0b prefixes, a bare
/// leading 0 for octal, and '_' separators after a prefix.
fn parse_int(raw: &str) -> Option<i64> {
    lazy_static! {
        static ref RADIX: Regex = Regex::new(r"^0([xXoObB]?)([0-9a-zA-Z_]+)$").unwrap();
    }

    if let Some(cap) = RADIX.captures(raw) {
        let radix = match cap.get(1)?.as_str() {
            "x" | "X" => 16,
            "b" | "B" => 2,
            _ => 8,
        };
        let prefixed = !cap.get(1)?.as_str().is_empty();
        let digits = cap.get(2)?.as_str();
        if !prefixed && digits.contains('_') {
            return None;
        }
        let digits = digits.replace('_', "");
        if digits.is_empty() {
            return None;
        }
        return i64::from_str_radix(&digits, radix).ok();
    }
    raw.parse::<i64>().ok()
}

/// Strips the surrounding quotes of a string literal and decodes its escape
/// sequences. Err holds the offending escape.
fn unquote(raw: &str) -> Result<String, String> {
    let inner = &raw[1..raw.len() - 1];
    let mut res = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }

        let escape = chars.next().ok_or_else(|| "\\".to_string())?;
        let decoded = match escape {
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            '\\' | '"' => escape,
            'x' | 'u' | 'U' => {
                let len = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits = chars.by_ref().take(len).collect::<String>();
                let bad = || format!("\\{}{}", escape, digits);
                if digits.len() != len {
                    return Err(bad());
                }
                u32::from_str_radix(&digits, 16)
                    .ok()
                    .and_then(std::char::from_u32)
                    .ok_or_else(bad)?
            }
            '0'..='7' => {
                let mut digits = escape.to_string();
                digits.extend(chars.by_ref().take(2));
                let bad = || format!("\\{}", digits);
                if digits.len() != 3 {
                    return Err(bad());
                }
                u32::from_str_radix(&digits, 8)
                    .ok()
                    .filter(|code| *code <= 0xff)
                    .and_then(std::char::from_u32)
                    .ok_or_else(bad)?
            }
            _ => return Err(format!("\\{}", escape)),
        };
        res.push(decoded);
    }
    Ok(res)
}


impl ScanError {
    pub fn new(reason: ScanErrorReason, pos: Position) -> Self {
        Self { reason, pos }
    }

    pub fn reason(&self) -> &ScanErrorReason {
        &self.reason
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}

impl ScanErrorReason {
    pub fn name(&self) -> &'static str {
        match self {
            UnmatchedClose => "UnmatchedClose",
            MalformedNumber(_) => "MalformedNumber",
            UnterminatedString => "UnterminatedString",
            InvalidEscape(_) => "InvalidEscape",
        }
    }
}

impl ErrorKind for ScanError {
    fn reify(&self) -> Sexp {
        let message = match &self.reason {
            UnmatchedClose => "parenthesis missing".to_string(),
            MalformedNumber(raw) => format!("invalid numeric literal {}", raw),
            UnterminatedString => "string literal not terminated".to_string(),
            InvalidEscape(escape) => format!("invalid escape sequence {}", escape),
        };
        list!(
            "ScanError",
            self.reason.name(),
            format!("{} @ {}", message, self.pos),
        )
    }
}


#[cfg(test)]
#[path = "./scanner_test.rs"]
mod scanner_test;
