//! Minimal Lisp interpreter over cons cells.
//!
//! Text is scanned into tokens, parsed into S-exps, and evaluated against a
//! chain of Scopes seeded with a few native functions.
//!
//! Logging goes through the log facade; clients set up a logger themselves.
//! See https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod interpreter;
pub mod lang_err;
pub mod parser;
pub mod primitive;
pub mod scope;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::interpreter::{eval, eval_args, Interpreter};
    pub use crate::lang_err::{EvalError, ExpectedCount};
    pub use crate::parser::parse;
    pub use crate::primitive::{
        Args, Atom, AtomValue, NativeFunction, Primitive, Ret, Symbol, ToSymbol,
    };
    pub use crate::scope::Scope;
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    // Macros.
    pub use crate::{err, list};
}
