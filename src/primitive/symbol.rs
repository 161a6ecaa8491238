use std::fmt;

use crate::sexp::{HeapSexp, Sexp};
use crate::token::Token;

use super::Primitive;


/// Identifier resolved through the Scope chain.
///
/// Identity is (name, kind); two Symbols parsed at different places are
/// interchangeable Scope keys.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    name: String,
    kind: Token,
}

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}


impl Symbol {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            kind: Token::Symbol,
        }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> Token {
        self.kind
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<Symbol> for Sexp {
    fn from(symbol: Symbol) -> Self {
        Sexp::Primitive(Primitive::Symbol(symbol))
    }
}

impl From<Symbol> for HeapSexp {
    fn from(symbol: Symbol) -> Self {
        HeapSexp::new(symbol.into())
    }
}


impl_try_from!(Symbol;
               Sexp              ->  Symbol,
               ref Sexp          ->  ref Symbol,
               Option<ref Sexp>  ->  ref Symbol,
);
