use std::convert::TryFrom;
use std::mem;

use super::sexp::{HeapSexp, Sexp};


/// Single list cell. cdr is normally another Cons or Nil, but nothing
/// prevents an improper tail.
#[derive(Clone, Debug, PartialEq)]
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

impl Cons {
    pub fn new<A: Into<HeapSexp>, D: Into<HeapSexp>>(car: A, cdr: D) -> Cons {
        Cons {
            car: car.into(),
            cdr: cdr.into(),
        }
    }

    pub fn car(&self) -> &Sexp {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> &Sexp {
        self.cdr.as_ref()
    }

    pub fn consume(mut self) -> (HeapSexp, HeapSexp) {
        (mem::take(&mut self.car), mem::take(&mut self.cdr))
    }
}

// Unlinks the cdr chain iteratively so dropping a long list does not recurse
// once per element.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = mem::take(self.cdr.as_mut());
        while let Sexp::Cons(mut cons) = next {
            next = mem::take(cons.cdr.as_mut());
        }
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Cons {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
