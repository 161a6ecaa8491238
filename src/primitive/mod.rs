//! Representation of primitives.

use std::fmt;

#[macro_use]
mod try_from_helper;

pub mod atom;
pub mod native_function;
pub mod symbol;

pub use self::atom::{Atom, AtomValue};
pub use self::native_function::{Args, NativeFn, NativeFunction, Ret};
pub use self::symbol::{Symbol, ToSymbol};


#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Symbol(Symbol),
    Atom(Atom),
    NativeFunction(NativeFunction),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Symbol(symbol) => write!(f, "{}", symbol),
            Primitive::Atom(atom) => write!(f, "{}", atom),
            Primitive::NativeFunction(fun) => write!(f, "{}", fun),
        }
    }
}

impl From<Primitive> for crate::sexp::Sexp {
    fn from(primitive: Primitive) -> Self {
        crate::sexp::Sexp::Primitive(primitive)
    }
}
