//! Errors produced while building or evaluating Values.
//!
//! These never escape the evaluator as Rust errors; they are carried inside
//! Value::Error and replace the enclosing S-exp's result.

use std::fmt;

use self::LangErr::*;


#[derive(Clone, Debug, PartialEq)]
pub enum LangErr {
    /// Literal that does not fit its numeric representation.
    InvalidNumber(String),
    DivisionByZero,
    /// Operator applied to operand types it doesn't support.
    UnsupportedOperation(String),
    MalformedExpression,
    UnknownOperator(String),
    NonNumericOperand,
    IntegerOverflow,
}

impl LangErr {
    /// Short, stable message identifying the kind of error.
    pub fn message(&self) -> &'static str {
        match self {
            InvalidNumber(_) => "Invalid number",
            DivisionByZero => "Division by zero",
            UnsupportedOperation(_) => "Operation not supported on floats",
            MalformedExpression => "S-expression does not start with an operator",
            UnknownOperator(_) => "Unknown operator",
            NonNumericOperand => "Cannot operate on non-number",
            IntegerOverflow => "Integer overflow",
        }
    }

    /// Offending text, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            InvalidNumber(s) | UnsupportedOperation(s) | UnknownOperator(s) => Some(s.as_str()),
            _ => None,
        }
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        // Alternate form names the offending text too.
        if f.alternate() {
            if let Some(detail) = self.detail() {
                write!(f, ": \"{}\"", detail)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for LangErr {}
