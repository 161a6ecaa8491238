//! Module for representing binding environments.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::Error;
use crate::lang_err::EvalError;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


/// Symbol-to-Sexp mapping with fallback to an optional parent.
///
/// A Scope borrows its parent, so the parent necessarily outlives every child
/// that refers to it. Writes only ever touch the Scope they are made on.
pub struct Scope<'p> {
    bindings: HashMap<Symbol, Sexp>,
    parent: Option<&'p Scope<'p>>,
}

impl Scope<'static> {
    /// Root Scope, without a parent.
    pub fn root() -> Self {
        Scope {
            bindings: HashMap::new(),
            parent: None,
        }
    }
}

impl<'p> Scope<'p> {
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Scope {
            bindings: HashMap::new(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Inserts or overwrites the binding in this Scope only.
    pub fn set(&mut self, symbol: Symbol, sexp: Sexp) {
        debug!("Binding {} = {}", symbol, sexp);
        self.bindings.insert(symbol, sexp);
    }

    /// Nearest binding of symbol, searching this Scope and then its
    /// ancestors.
    pub fn lookup(&self, symbol: &Symbol) -> Option<&Sexp> {
        let mut scope = Some(self);
        while let Some(curr) = scope {
            if let Some(sexp) = curr.bindings.get(symbol) {
                return Some(sexp);
            }
            scope = curr.parent;
        }
        None
    }

    pub fn get(&self, symbol: &Symbol) -> Result<Sexp, Error> {
        trace!("Looking up {}", symbol);
        match self.lookup(symbol) {
            Some(sexp) => Ok(sexp.clone()),
            None => err!(EvalError::UnboundSymbol(symbol.clone())),
        }
    }

    pub fn contains_local(&self, symbol: &Symbol) -> bool {
        self.bindings.contains_key(symbol)
    }

    /// Every Symbol visible from this Scope, sorted and deduplicated.
    pub fn visible_symbols(&self) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        let mut scope = Some(self);
        while let Some(curr) = scope {
            symbols.extend(curr.bindings.keys().cloned());
            scope = curr.parent;
        }
        symbols.sort();
        symbols.dedup();
        symbols
    }
}


impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            write!(f, "parent({:?}) ", parent)?;
        }
        let mut bindings = self.bindings.iter().collect::<Vec<_>>();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "data: {{")?;
        for (i, (symbol, sexp)) in bindings.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", symbol, sexp)?;
        }
        write!(f, "}}")
    }
}


#[cfg(test)]
#[path = "./scope_test.rs"]
mod scope_test;
