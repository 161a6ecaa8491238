//! Representation of self-evaluating scalar literals.

use std::fmt;

use derivative::Derivative;

use super::Primitive;
use crate::sexp::{HeapSexp, Sexp};
use crate::token::Token;


/// Integer, float, or string literal.
///
/// The kind is implied by the value, so the two can never disagree. Raw
/// source text is kept for diagnostics but does not take part in equality.
#[derive(Clone, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Atom {
    #[derivative(PartialEq = "ignore")]
    raw: String,
    value: AtomValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AtomValue {
    Int(i64),
    Float(f64),
    String(String),
}


impl Atom {
    pub fn new<S: AsRef<str>>(raw: S, value: AtomValue) -> Self {
        Self {
            raw: raw.as_ref().to_string(),
            value,
        }
    }

    pub fn int(val: i64) -> Self {
        Self::new(val.to_string(), AtomValue::Int(val))
    }

    pub fn float(val: f64) -> Self {
        Self::new(FloatFmt(val).to_string(), AtomValue::Float(val))
    }

    pub fn string<S: AsRef<str>>(val: S) -> Self {
        Self::new(
            format!("{:?}", val.as_ref()),
            AtomValue::String(val.as_ref().to_string()),
        )
    }

    /// Int, Float, or String.
    pub fn kind(&self) -> Token {
        match self.value {
            AtomValue::Int(_) => Token::Int,
            AtomValue::Float(_) => Token::Float,
            AtomValue::String(_) => Token::String,
        }
    }

    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn value(&self) -> &AtomValue {
        &self.value
    }

    pub fn consume(self) -> AtomValue {
        self.value
    }
}


/// Shortest round-trip digits, switching to exponent form outside
/// [1e-4, 1e6). Matches the familiar `%g` rendering, e.g. 6.4, 5, 1e+06.
struct FloatFmt(f64);

impl fmt::Display for FloatFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = self.0;
        if val.is_nan() {
            return write!(f, "NaN");
        }
        if val.is_infinite() {
            return write!(f, "{}Inf", if val > 0. { "+" } else { "-" });
        }

        let sci = format!("{:e}", val);
        let (mantissa, exp) = match sci.split_once('e') {
            Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().map_err(|_| fmt::Error)?),
            None => return write!(f, "{}", val),
        };
        if exp < -4 || exp >= 6 {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
        } else {
            write!(f, "{}", val)
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AtomValue::Int(val) => write!(f, "{}", val),
            AtomValue::Float(val) => write!(f, "{}", FloatFmt(*val)),
            AtomValue::String(val) => write!(f, "{:?}", val),
        }
    }
}


impl From<i64> for Atom {
    fn from(val: i64) -> Self {
        Atom::int(val)
    }
}

impl From<f64> for Atom {
    fn from(val: f64) -> Self {
        Atom::float(val)
    }
}

impl From<&str> for Atom {
    fn from(val: &str) -> Self {
        Atom::string(val)
    }
}

impl From<String> for Atom {
    fn from(val: String) -> Self {
        Atom::string(val)
    }
}

impl From<Atom> for Sexp {
    fn from(atom: Atom) -> Self {
        Sexp::Primitive(Primitive::Atom(atom))
    }
}

impl From<Atom> for HeapSexp {
    fn from(atom: Atom) -> Self {
        HeapSexp::new(atom.into())
    }
}

// Impl From<T> for Sexp over Atom payloads.
macro_rules! sexp_from {
    ($($from:ty),+ $(,)?) => {
        $(
            impl From<$from> for Sexp {
                fn from(elem: $from) -> Self {
                    Atom::from(elem).into()
                }
            }
        )+
    };
}

sexp_from!(i64, f64, &str, String);


impl_try_from!(Atom;
               Sexp              ->  Atom,
               ref Sexp          ->  ref Atom,
               Option<ref Sexp>  ->  ref Atom,
);


#[cfg(test)]
#[path = "./atom_test.rs"]
mod atom_test;
