//! Module for constructing lists as S-exps in append order.
//!
//! Elements are buffered and linked back-to-front on release, so building a
//! list of n elements is O(n) without walking to the tail on every append.

use crate::sexp::{Cons, Sexp};


/// Returns the elements as a proper Sexp list.
///
/// Example:
///   list!(Symbol::new("a"), 1, "two") => (a 1 "two")
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut list = $crate::sexp::ConsList::new();
            $(
                list.append($elem);
            )*
            list.release()
        }
    };
}


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Sexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList { elems: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list terminated by Nil.
    pub fn release(self) -> Sexp {
        self.release_with_tail(Sexp::Nil)
    }

    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        self.elems
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Cons::new(car, cdr).into())
    }
}
