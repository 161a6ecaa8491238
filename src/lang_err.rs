use std::borrow::Cow;
use std::fmt;

use self::EvalError::*;
use self::ExpectedCount::*;
use crate::error::ErrorKind;
use crate::primitive::Symbol;
use crate::sexp::Sexp;
use crate::token::Token;


/// Failures raised while evaluating, either by the evaluator itself or by a
/// native function.
#[derive(Debug)]
pub enum EvalError {
    UnboundSymbol(Symbol),
    NotCallable(Sexp),
    ImproperArgList(Sexp),
    WrongArgumentCount {
        name: &'static str,
        given: usize,
        expected: ExpectedCount,
    },
    InvalidArgument {
        name: &'static str,
        given: Sexp,
        expected: Cow<'static, str>,
    },
    TypeMismatch {
        name: &'static str,
        given: Token,
        expected: Token,
    },
    DepthOverflow(usize),
}

#[derive(Debug)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl EvalError {
    pub fn name(&self) -> &'static str {
        match self {
            UnboundSymbol(_) => "UnboundSymbol",
            NotCallable(_) => "NotCallable",
            ImproperArgList(_) => "ImproperArgList",
            WrongArgumentCount { .. } => "WrongArgumentCount",
            InvalidArgument { .. } => "InvalidArgument",
            TypeMismatch { .. } => "TypeMismatch",
            DepthOverflow(_) => "DepthOverflow",
        }
    }
}

impl ErrorKind for EvalError {
    fn reify(&self) -> Sexp {
        list!("EvalError", self.name(), self.to_string())
    }
}


impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnboundSymbol(symbol) => write!(f, "Symbol not found in scope: {{{}}}", symbol),
            NotCallable(val) => write!(f, "Not callable: {}", val),
            ImproperArgList(val) => write!(f, "Improper argument list: {}", val),
            WrongArgumentCount {
                name,
                given,
                expected,
            } => write!(
                f,
                "{}: wrong argument count: given {}, expected {}",
                name, given, expected
            ),
            InvalidArgument {
                name,
                given,
                expected,
            } => write!(
                f,
                "{}: invalid argument: given {}, expected {}",
                name, given, expected
            ),
            TypeMismatch {
                name,
                given,
                expected,
            } => write!(
                f,
                "{}: arguments have to be the same type: given {}, expected {}",
                name, given, expected
            ),
            DepthOverflow(max) => write!(f, "Nested deeper than {}", max),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        };
    }
}
