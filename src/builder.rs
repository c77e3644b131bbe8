//! Conversion of ParseTrees into Values.
//!
//! No arithmetic happens here. The only failure is a numeric literal that
//! doesn't fit its representation, which becomes an Error leaf in place.

use log::trace;

use crate::grammar::{ParseTree, Rule};
use crate::lang_err::LangErr;
use crate::value::Value;


pub fn build(node: ParseTree) -> Value {
    let tag = *node.tag();
    match tag {
        Rule::Integer => read_integer(node.contents()),
        Rule::Float => read_float(node.contents()),
        Rule::Symbol => Value::Symbol(node.contents().clone()),
        Rule::Program | Rule::SExpr => {
            let mut sexpr = Vec::new();
            for child in node.into_children() {
                if child.tag().is_structural() {
                    continue;
                }
                sexpr.push(build(child));
            }
            Value::SExpr(sexpr)
        }
        // Contributes nothing on its own.
        Rule::Paren | Rule::Anchor => Value::sexpr(),
    }
}

fn read_integer(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(i) => Value::Integer(i),
        Err(err) => {
            trace!("Invalid integer literal {}: {}", literal, err);
            Value::Error(LangErr::InvalidNumber(literal.to_string()))
        }
    }
}

fn read_float(literal: &str) -> Value {
    match literal.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => {
            trace!("Invalid float literal {}", literal);
            Value::Error(LangErr::InvalidNumber(literal.to_string()))
        }
    }
}


#[cfg(test)]
#[path = "./builder_test.rs"]
mod builder_test;
