//! Representation of natively-implemented operations.

use std::fmt;

use derivative::Derivative;

use super::Primitive;
use crate::error::Error;
use crate::scope::Scope;
use crate::sexp::{HeapSexp, Sexp};


/// Unevaluated argument expressions, in call order.
pub type Args = Vec<Sexp>;
pub type Ret = Result<Sexp, Error>;

pub type NativeFn = fn(&mut Scope<'_>, Args) -> Ret;

/// First-class callable bound in a Scope like any other value.
///
/// Receives its arguments unevaluated; each function decides which of them
/// to evaluate (typically through interpreter::eval_args) and is responsible
/// for its own arity and type checks.
#[derive(Clone, Copy, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct NativeFunction {
    name: &'static str,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    fun: NativeFn,
}

impl NativeFunction {
    pub fn new(name: &'static str, fun: NativeFn) -> NativeFunction {
        NativeFunction { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, scope: &mut Scope, args: Args) -> Ret {
        (self.fun)(scope, args)
    }
}


impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn: {}", self.name)
    }
}

impl From<NativeFunction> for Sexp {
    fn from(fun: NativeFunction) -> Self {
        Sexp::Primitive(Primitive::NativeFunction(fun))
    }
}

impl From<NativeFunction> for HeapSexp {
    fn from(fun: NativeFunction) -> Self {
        HeapSexp::new(fun.into())
    }
}


impl_try_from!(NativeFunction;
               Sexp              ->  NativeFunction,
               ref Sexp          ->  ref NativeFunction,
               Option<ref Sexp>  ->  ref NativeFunction,
);
