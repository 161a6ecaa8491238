//! Native functions installed into the root Scope.
//!
//! Each function receives its arguments unevaluated and states below which
//! positions it evaluates.

use std::borrow::Cow;

use lazy_static::lazy_static;
use log::debug;

use crate::error::Error;
use crate::interpreter::{eval, eval_args};
use crate::lang_err::{EvalError, ExpectedCount};
use crate::primitive::{Args, Atom, AtomValue, NativeFunction, Primitive, Ret, Symbol};
use crate::scope::Scope;
use crate::sexp::Sexp;

/// Deepest list nesting a builtin will construct.
pub const MAX_LIST_DEPTH: usize = 128;

macro_rules! builtins {
    [$($n:tt : $x:expr),+ $(,)?] => {
        vec![
            $(
                NativeFunction::new($n, $x),
            )+
        ]
    };
}

lazy_static! {
    pub static ref BUILTINS: Vec<NativeFunction> = builtins![
        "setq": setq,
        "print": print,
        "list": list,
        "first": first,
        "+": add,
    ];
}

/// Binds every builtin under its own name in scope.
pub fn install(scope: &mut Scope) {
    for fun in BUILTINS.iter() {
        debug!("Installing builtin {}", fun.name());
        scope.set(Symbol::new(fun.name()), (*fun).into());
    }
}

/// True for a call to a builtin that is run for its side effect only, so its
/// nil result is not worth echoing.
pub fn returns_nothing(form: &Sexp) -> bool {
    match form {
        Sexp::Cons(cons) => match cons.car() {
            Sexp::Primitive(Primitive::Symbol(symbol)) => symbol.as_str() == "print",
            _ => false,
        },
        _ => false,
    }
}


fn check_count(
    name: &'static str,
    args: &Args,
    expected: ExpectedCount,
) -> Result<(), Error> {
    let given = args.len();
    let ok = match expected {
        ExpectedCount::Exactly(n) => given == n,
        ExpectedCount::AtLeast(n) => given >= n,
    };
    if ok {
        Ok(())
    } else {
        err!(EvalError::WrongArgumentCount {
            name,
            given,
            expected,
        })
    }
}

/// (setq NAME EXPR): evaluates EXPR only and binds it to NAME in the calling
/// Scope. Returns the bound value.
fn setq(scope: &mut Scope, args: Args) -> Ret {
    check_count("setq", &args, ExpectedCount::AtLeast(2))?;
    let name = match &args[0] {
        Sexp::Primitive(Primitive::Symbol(symbol)) => symbol.clone(),
        other => {
            return err!(EvalError::InvalidArgument {
                name: "setq",
                given: other.clone(),
                expected: Cow::Borrowed("a Symbol"),
            });
        }
    };
    let value = eval(&args[1], scope)?;
    scope.set(name, value.clone());
    Ok(value)
}

/// (print EXPR...): evaluates every argument, then writes the first one to
/// stdout. Lists use the readable form. Returns nil.
fn print(scope: &mut Scope, args: Args) -> Ret {
    check_count("print", &args, ExpectedCount::AtLeast(1))?;
    let vals = eval_args(scope, &args)?;
    match vals.first() {
        Some(val @ Sexp::Cons(_)) => println!("{}", val.readable()),
        Some(val) => println!("{}", val),
        None => {}
    }
    Ok(Sexp::Nil)
}

/// (list EXPR...): evaluates every argument and returns them as a proper
/// list, in order.
///
/// Values can be fed back in across evaluations, e.g. `(setq a (list a))`,
/// so the result is refused once it nests deeper than MAX_LIST_DEPTH.
fn list(scope: &mut Scope, args: Args) -> Ret {
    check_count("list", &args, ExpectedCount::AtLeast(1))?;
    let list: Sexp = eval_args(scope, &args)?.into();
    if list.nesting_depth() > MAX_LIST_DEPTH {
        return err!(EvalError::DepthOverflow(MAX_LIST_DEPTH));
    }
    Ok(list)
}

/// (first LIST): evaluates every argument and returns the car of the first.
fn first(scope: &mut Scope, args: Args) -> Ret {
    check_count("first", &args, ExpectedCount::AtLeast(1))?;
    let vals = eval_args(scope, &args)?;
    match vals.into_iter().next() {
        Some(Sexp::Cons(cons)) => {
            let (car, _) = cons.consume();
            Ok(*car)
        }
        Some(other) => err!(EvalError::InvalidArgument {
            name: "first",
            given: other,
            expected: Cow::Borrowed("a list"),
        }),
        None => Ok(Sexp::Nil),
    }
}

/// (+ A B): evaluates both arguments. Two Ints give an Int, two Floats give a
/// Float; anything else is an error.
fn add(scope: &mut Scope, args: Args) -> Ret {
    check_count("+", &args, ExpectedCount::Exactly(2))?;
    let vals = eval_args(scope, &args)?;
    let (lhs, rhs) = (numeric_arg(&vals[0])?, numeric_arg(&vals[1])?);

    match (lhs.value(), rhs.value()) {
        (AtomValue::Int(a), AtomValue::Int(b)) => match a.checked_add(*b) {
            Some(sum) => Ok(Atom::int(sum).into()),
            None => err!(EvalError::InvalidArgument {
                name: "+",
                given: vals[1].clone(),
                expected: Cow::Owned(format!("a sum with {} within i64 range", a)),
            }),
        },
        (AtomValue::Float(a), AtomValue::Float(b)) => Ok(Atom::float(a + b).into()),
        _ => err!(EvalError::TypeMismatch {
            name: "+",
            given: rhs.kind(),
            expected: lhs.kind(),
        }),
    }
}

// Int or Float Atom.
fn numeric_arg(val: &Sexp) -> Result<&Atom, Error> {
    if let Sexp::Primitive(Primitive::Atom(atom)) = val {
        if let AtomValue::Int(_) | AtomValue::Float(_) = atom.value() {
            return Ok(atom);
        }
    }
    err!(EvalError::InvalidArgument {
        name: "+",
        given: val.clone(),
        expected: Cow::Borrowed("a numeric atom"),
    })
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
