//! Representation of errors raised while scanning, parsing, or evaluating.
//!
//! General error mechanism that can use any ErrorKind. Reification maps each
//! kind onto a plain S-exp so errors can be printed and compared the same way
//! as any other value.

use std::fmt;

use crate::sexp::Sexp;


/// Creates an Error wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(Box::new($($kind)+)))
    };
}


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug /* fmt::Display auto-impled below */ {
    /// Renders as ("KindName" "Reason" "message").
    fn reify(&self) -> Sexp;
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn consume(self) -> Box<dyn ErrorKind> {
        self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reify().readable())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}


impl std::error::Error for Error {}
