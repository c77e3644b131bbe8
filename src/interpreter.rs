//! Reduction of Value trees.
//!
//! Evaluation is total: malformed input reduces to an Error Value rather than
//! panicking or returning a Rust error.

use std::convert::TryFrom;

use log::{debug, trace};

use crate::builtin::BuiltIn;
use crate::lang_err::LangErr;
use crate::number::Number;
use crate::value::Value;


pub fn eval(form: Value) -> Value {
    match form {
        Value::SExpr(children) => eval_sexpr(children),
        leaf => leaf,
    }
}

fn eval_sexpr(children: Vec<Value>) -> Value {
    let mut children: Vec<Value> = children.into_iter().map(eval).collect();

    // First Error wins.
    if let Some(i) = children.iter().position(Value::is_error) {
        return children.swap_remove(i);
    }

    let mut iter = children.into_iter();
    let op = match iter.next() {
        Some(op) => op,
        None => return Value::sexpr(),
    };
    let operands: Vec<Value> = iter.collect();
    if operands.is_empty() {
        return op;
    }

    match apply(&op, &operands) {
        Ok(num) => num.into(),
        Err(err) => {
            debug!("{} {:?} -> {:#}", op, operands, err);
            Value::Error(err)
        }
    }
}

/// Folds operands left-to-right with op; `-` with a single operand negates.
fn apply(op: &Value, operands: &[Value]) -> Result<Number, LangErr> {
    let symbol = match op {
        Value::Symbol(symbol) => symbol,
        _ => return Err(LangErr::MalformedExpression),
    };
    let builtin = match BuiltIn::lookup(symbol) {
        Some(builtin) => builtin,
        None => return Err(LangErr::UnknownOperator(symbol.clone())),
    };
    trace!("Applying {} to {} operands", builtin, operands.len());

    let nums = operands
        .iter()
        .map(Number::try_from)
        .collect::<Result<Vec<Number>, LangErr>>()?;

    let (first, rest) = match nums.split_first() {
        Some(split) => split,
        None => return Err(LangErr::MalformedExpression),
    };
    if symbol == "-" && rest.is_empty() {
        return first.checked_neg();
    }

    let mut acc = *first;
    for num in rest {
        acc = builtin.apply(acc, *num)?;
    }
    Ok(acc)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
