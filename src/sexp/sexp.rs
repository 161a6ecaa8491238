//! Module for representing S-exps.

use std::fmt;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use crate::error::Error;
use crate::parser::parse;
use crate::primitive::Primitive;


/// S-exp on the heap.
pub type HeapSexp = Box<Sexp>;

/// Uniform tree value for both code and data.
#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
    Nil,
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}

/// Display adapter for the flat list rendering, e.g. `( a b c )`.
pub struct Readable<'a>(&'a Sexp);


impl Sexp {
    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    /// True for a Cons chain terminated by Nil, and for Nil itself.
    pub fn is_proper_list(&self) -> bool {
        self.iter().all(|(_, from_cons)| from_cons)
    }

    /// Number of list levels nested through cars; 0 for a non-list.
    ///
    /// Walks with an explicit stack, so arbitrarily deep values are measured
    /// without recursing.
    pub fn nesting_depth(&self) -> usize {
        let mut max = 0;
        let mut pending = vec![(self, 1)];
        while let Some((sexp, level)) = pending.pop() {
            if !matches!(sexp, Sexp::Cons(_)) {
                continue;
            }
            max = max.max(level);
            for (elem, _) in sexp {
                if let Sexp::Cons(_) = elem {
                    pending.push((elem, level + 1));
                }
            }
        }
        max
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }

    pub fn readable(&self) -> Readable {
        Readable(self)
    }

    /// Writes self in the flat list form.
    ///
    /// Non-list elements are each followed by a space, nested lists are
    /// wrapped in their own parens, and an improper tail is written after
    /// " . ". Leaves (Primitives and Nil) go through write_leaf and parens
    /// through write_paren, along with the list depth, so callers can
    /// decorate either.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Sexp, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        if !matches!(self, Sexp::Cons(_)) {
            return write_leaf(w, self, depth);
        }

        write_paren(w, "(", depth)?;
        write!(w, " ")?;
        let mut iter = self.iter().peekable();
        while let Some((val, from_cons)) = iter.next() {
            if !from_cons {
                write!(w, ". ")?;
            }
            match val {
                Sexp::Cons(_) => {
                    val.write_list(w, depth + 1, write_leaf, write_paren)?;
                    // Separate a nested list from whatever follows it rather
                    // than running the two together as in `( 2 3 )4`.
                    if iter.peek().is_some() {
                        write!(w, " ")?;
                    }
                }
                _ => {
                    write_leaf(w, val, depth)?;
                    write!(w, " ")?;
                }
            }
        }
        write_paren(w, ")", depth)
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is the improper tail of a list (or a
    // top-level non-list value) rather than the car of a Cons, and is
    // necessarily the last element. Nil terminates iteration without being
    // yielded.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current.take()?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Nil => None,
            _ => Some((sexp, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    // (Sexp, from_cons). See impl Iterator blocks above for more info.
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

/// Structural form: every Cons renders as `(cons <car> <cdr>)`.
impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Primitive(primitive) => write!(f, "{}", primitive),
            Sexp::Nil => write!(f, "nil"),
            Sexp::Cons(_) => {
                // Walk the cdr chain iteratively; only cars recurse.
                let mut closing: usize = 0;
                let mut curr = self;
                while let Sexp::Cons(cons) = curr {
                    write!(f, "(cons {} ", cons.car())?;
                    closing += 1;
                    curr = cons.cdr();
                }
                write!(f, "{}", curr)?;
                write!(f, "{}", ")".repeat(closing))
            }
        }
    }
}

impl<'a> fmt::Display for Readable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_list(
            f,
            0,
            &mut |writer, leaf, _depth| write!(writer, "{}", leaf),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        )
    }
}


// From<T> impls.
impl FromStr for Sexp {
    type Err = Error;

    /// First form in s, or Nil if there is none.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s)?.into_iter().next().unwrap_or_default())
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
