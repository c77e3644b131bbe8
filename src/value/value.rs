//! Module for representing Lispy values.

use std::fmt;
use std::str::FromStr;

use crate::builder;
use crate::grammar::{Parser, SyntaxError};
use crate::lang_err::LangErr;


/// Tagged value produced by the tree builder and reduced by the interpreter.
///
/// Only SExpr has children, and it owns them outright; there is no sharing
/// between trees.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Symbol(String),
    Error(LangErr),
    SExpr(Vec<Value>),
}

impl Value {
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    pub fn symbol<S: Into<String>>(s: S) -> Self {
        Value::Symbol(s.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Writes leaves with write_leaf and S-exp parens with write_paren, passing
    /// along the depth of each.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Value, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        let children = match self {
            Value::SExpr(children) => children,
            leaf => return write_leaf(w, leaf, depth),
        };

        write_paren(w, "(", depth)?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                w.write_char(' ')?;
            }
            child.write_list(w, depth + 1, write_leaf, write_paren)?;
        }
        write_paren(w, ")", depth)
    }

    /// Writes a leaf on its own; Floats use the given number of fractional
    /// digits.
    pub fn write_leaf<W: fmt::Write>(&self, w: &mut W, precision: usize) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(w, "{}", i),
            Value::Float(f) => write!(w, "{:.*}", precision, f),
            Value::Symbol(s) => write!(w, "{}", s),
            Value::Error(err) => write!(w, "Error: {}", err),
            Value::SExpr(_) => self.write_list(
                w,
                0,
                &mut |w, leaf, _| leaf.write_leaf(w, precision),
                &mut |w, paren, _| w.write_str(paren),
            ),
        }
    }
}


impl fmt::Display for Value {
    /// Floats default to six fractional digits; use {:.N} for others.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        self.write_leaf(f, precision)
    }
}

impl FromStr for Value {
    type Err = SyntaxError;

    /// Parses and builds a whole program without evaluating it. The result is
    /// always the root SExpr, one child per top-level expression.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(builder::build(Parser::default().parse(s)?))
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
