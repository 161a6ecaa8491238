//! Module for parsing scanned tokens into S-exps.

use log::trace;

use crate::error::{Error, ErrorKind};
use crate::primitive::{Atom, AtomValue, Symbol};
use crate::sexp::{ConsList, Sexp};
use crate::token::{Position, Scanner, Token, TokenValue};

use self::ParseErrorReason::*;

const MAX_DEPTH: usize = 128;
const MAX_LENGTH: usize = 4096;


/// Parses every top-level form in text.
///
/// Any scan or parse failure aborts the whole text; no partial result is
/// returned.
pub fn parse<S: AsRef<str>>(text: S) -> Result<Vec<Sexp>, Error> {
    let mut parser = Parser::new(text.as_ref())?;
    let mut sexps = Vec::new();
    while let Some(sexp) = parser.parse_next()? {
        sexps.push(sexp);
    }
    Ok(sexps)
}


/// Recursive-descent parser over a Scanner with one token of lookahead.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    token: Token,
    value: TokenValue,
    depth: usize,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    pos: Position,
}

#[derive(Debug)]
pub enum ParseErrorReason {
    UnmatchedOpen,
    InvalidToken(String),
    DepthOverflow,
    LengthOverflow,
}


impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(text);
        let (value, token) = scanner.next_token()?;
        Ok(Self {
            scanner,
            token,
            value,
            depth: 0,
        })
    }

    /// Next top-level form, or None at end of input.
    pub fn parse_next(&mut self) -> Result<Option<Sexp>, Error> {
        self.skip_blank()?;
        if self.token == Token::EndOfFile {
            return Ok(None);
        }
        let sexp = self.parse_form()?;
        trace!("Parsed {}", sexp);
        Ok(Some(sexp))
    }

    fn advance(&mut self) -> Result<(), Error> {
        let (value, token) = self.scanner.next_token()?;
        self.value = value;
        self.token = token;
        Ok(())
    }

    // Whitespace and newlines separate forms but never appear in the tree.
    fn skip_blank(&mut self) -> Result<(), Error> {
        while let Token::Whitespace | Token::Newline = self.token {
            self.advance()?;
        }
        Ok(())
    }

    fn parse_form(&mut self) -> Result<Sexp, Error> {
        let sexp: Sexp = match self.token {
            Token::Symbol => Symbol::new(self.value.raw()).into(),
            Token::Int => Atom::new(self.value.raw(), AtomValue::Int(*self.value.int())).into(),
            Token::Float => {
                Atom::new(self.value.raw(), AtomValue::Float(*self.value.float())).into()
            }
            Token::String => Atom::new(
                self.value.raw(),
                AtomValue::String(self.value.string().clone()),
            )
            .into(),
            Token::LParen => {
                let open = *self.value.pos();
                if self.depth >= MAX_DEPTH {
                    return err!(ParseError::new(DepthOverflow, open));
                }
                self.depth += 1;
                self.advance()?;
                let list = self.parse_list(open)?;
                self.depth -= 1;
                return Ok(list);
            }
            Token::EndOfFile => {
                return err!(ParseError::new(UnmatchedOpen, *self.value.pos()));
            }
            _ => {
                return err!(ParseError::new(
                    InvalidToken(self.value.raw().clone()),
                    *self.value.pos(),
                ));
            }
        };
        self.advance()?;
        Ok(sexp)
    }

    // Body of a list whose '(' has already been consumed, through the
    // matching ')'.
    fn parse_list(&mut self, open: Position) -> Result<Sexp, Error> {
        let mut list = ConsList::new();
        loop {
            self.skip_blank()?;
            match self.token {
                Token::RParen => {
                    self.advance()?;
                    return Ok(list.release());
                }
                // End of input with depth > 0.
                Token::EndOfFile => return err!(ParseError::new(UnmatchedOpen, open)),
                _ => {
                    if list.len() >= MAX_LENGTH {
                        return err!(ParseError::new(LengthOverflow, open));
                    }
                    list.append(self.parse_form()?);
                }
            }
        }
    }
}


impl ParseError {
    pub fn new(reason: ParseErrorReason, pos: Position) -> Self {
        Self { reason, pos }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}

impl ParseErrorReason {
    pub fn name(&self) -> &'static str {
        match self {
            UnmatchedOpen => "UnmatchedOpen",
            InvalidToken(_) => "InvalidToken",
            DepthOverflow => "DepthOverflow",
            LengthOverflow => "LengthOverflow",
        }
    }
}

impl ErrorKind for ParseError {
    fn reify(&self) -> Sexp {
        let message = match &self.reason {
            UnmatchedOpen => "parenthesis missing".to_string(),
            InvalidToken(raw) => format!("unexpected {:?}", raw),
            DepthOverflow => format!("lists nested deeper than {}", MAX_DEPTH),
            LengthOverflow => format!("list longer than {} elements", MAX_LENGTH),
        };
        list!(
            "ParseError",
            self.reason.name(),
            format!("{} @ {}", message, self.pos),
        )
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
