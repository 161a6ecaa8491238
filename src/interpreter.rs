//! Tree-walking evaluation of S-exps against a Scope.

use std::cell::Cell;

use log::{debug, info, trace};

use crate::builtins;
use crate::error::Error;
use crate::lang_err::EvalError::{self, *};
use crate::parser::parse;
use crate::primitive::{Args, Primitive, Ret};
use crate::scope::Scope;
use crate::sexp::Sexp;

pub const MAX_DEPTH: usize = 256;

thread_local! {
    static DEPTH: Cell<usize> = Cell::new(0);
}


/// Evaluates sexp in scope.
///
/// Atoms, NativeFunctions, and Nil evaluate to themselves, Symbols to their
/// nearest binding. A Cons is a call: its car must evaluate to a
/// NativeFunction, which receives the remaining elements unevaluated.
pub fn eval(sexp: &Sexp, scope: &mut Scope) -> Ret {
    let _guard = DepthGuard::enter()?;
    trace!("Evaluating {}", sexp);

    match sexp {
        Sexp::Nil => Ok(Sexp::Nil),
        Sexp::Primitive(Primitive::Symbol(symbol)) => scope.get(symbol),
        Sexp::Primitive(_) => Ok(sexp.clone()),
        Sexp::Cons(cons) => {
            let fun = match eval(cons.car(), scope)? {
                Sexp::Primitive(Primitive::NativeFunction(fun)) => fun,
                other => return err!(NotCallable(other)),
            };
            let args = call_args(cons.cdr())?;
            debug!("Calling {} with {} args", fun, args.len());
            fun.call(scope, args)
        }
    }
}

/// Evaluates each of args in order, stopping at the first failure.
pub fn eval_args(scope: &mut Scope, args: &[Sexp]) -> Result<Vec<Sexp>, Error> {
    let mut res = Vec::with_capacity(args.len());
    for arg in args {
        res.push(eval(arg, scope)?);
    }
    Ok(res)
}

// Elements of a call's argument chain, unevaluated.
fn call_args(chain: &Sexp) -> Result<Args, Error> {
    let mut args = Args::new();
    for (arg, from_cons) in chain {
        if !from_cons {
            return err!(ImproperArgList(chain.clone()));
        }
        args.push(arg.clone());
    }
    Ok(args)
}


// Counts nested eval calls on this thread; the count drops back when the
// guard does, including on early return through ?.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Result<Self, Error> {
        DEPTH.with(|depth| {
            if depth.get() >= MAX_DEPTH {
                return err!(EvalError::DepthOverflow(MAX_DEPTH));
            }
            depth.set(depth.get() + 1);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}


/// Owns the root Scope and drives parse + eval over whole input units.
pub struct Interpreter {
    root: Scope<'static>,
}

impl Interpreter {
    pub fn new() -> Self {
        let mut root = Scope::root();
        builtins::install(&mut root);
        info!(
            "Interpreter ready with {} builtins",
            root.visible_symbols().len()
        );
        Self { root }
    }

    pub fn scope(&self) -> &Scope<'static> {
        &self.root
    }

    pub fn scope_mut(&mut self) -> &mut Scope<'static> {
        &mut self.root
    }

    /// Parses all of text, then evaluates each top-level form in order.
    ///
    /// A parse failure evaluates nothing. An evaluation failure stops the
    /// remaining forms, but side effects of earlier ones stay in place.
    pub fn interpret<S: AsRef<str>>(&mut self, text: S) -> Result<Vec<Sexp>, Error> {
        self.interpret_each(text, |_, _| {})
    }

    /// Same as interpret, additionally handing each (form, result) pair to
    /// on_result as soon as the form has been evaluated.
    pub fn interpret_each<S, F>(&mut self, text: S, mut on_result: F) -> Result<Vec<Sexp>, Error>
    where
        S: AsRef<str>,
        F: FnMut(&Sexp, &Sexp),
    {
        let forms = parse(text)?;
        let mut results = Vec::with_capacity(forms.len());
        for form in &forms {
            let result = eval(form, &mut self.root)?;
            on_result(form, &result);
            results.push(result);
        }
        Ok(results)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
