//! Representation of Lispy numbers.
//!
//! Integer arithmetic is checked; mixing an Integer with a Float promotes the
//! Integer, producing a fresh Float rather than rewriting either operand.

use std::convert::TryFrom;
use std::fmt;

use self::Number::*;
use crate::lang_err::LangErr;
use crate::value::Value;


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

pub type NumResult = Result<Number, LangErr>;


impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Integer(i) => i as f64,
            Float(f) => f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Integer(i) => i == 0,
            // Also true for -0.0.
            Float(f) => f == 0.0,
        }
    }

    pub fn checked_add(self, other: Self) -> NumResult {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_add(b).map(Integer).ok_or(LangErr::IntegerOverflow),
            (a, b) => Ok(Float(a.as_f64() + b.as_f64())),
        }
    }

    pub fn checked_sub(self, other: Self) -> NumResult {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_sub(b).map(Integer).ok_or(LangErr::IntegerOverflow),
            (a, b) => Ok(Float(a.as_f64() - b.as_f64())),
        }
    }

    pub fn checked_mul(self, other: Self) -> NumResult {
        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_mul(b).map(Integer).ok_or(LangErr::IntegerOverflow),
            (a, b) => Ok(Float(a.as_f64() * b.as_f64())),
        }
    }

    /// Integer division truncates toward zero.
    pub fn checked_div(self, other: Self) -> NumResult {
        if other.is_zero() {
            return Err(LangErr::DivisionByZero);
        }

        match (self, other) {
            (Integer(a), Integer(b)) => a.checked_div(b).map(Integer).ok_or(LangErr::IntegerOverflow),
            (a, b) => Ok(Float(a.as_f64() / b.as_f64())),
        }
    }

    /// Integer-only remainder; the sign follows the dividend.
    pub fn checked_rem(self, other: Self) -> NumResult {
        match (self, other) {
            (Integer(_), Integer(0)) => Err(LangErr::DivisionByZero),
            (Integer(a), Integer(b)) => a.checked_rem(b).map(Integer).ok_or(LangErr::IntegerOverflow),
            _ => Err(LangErr::UnsupportedOperation("%".to_string())),
        }
    }

    pub fn checked_neg(self) -> NumResult {
        match self {
            Integer(i) => i.checked_neg().map(Integer).ok_or(LangErr::IntegerOverflow),
            Float(f) => Ok(Float(-f)),
        }
    }
}

impl fmt::Display for Number {
    /// Floats default to six fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(i) => write!(f, "{}", i),
            Float(ff) => write!(f, "{:.*}", f.precision().unwrap_or(6), ff),
        }
    }
}


impl From<Number> for Value {
    fn from(num: Number) -> Self {
        match num {
            Integer(i) => Value::Integer(i),
            Float(f) => Value::Float(f),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = LangErr;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(Integer(*i)),
            Value::Float(f) => Ok(Float(*f)),
            _ => Err(LangErr::NonNumericOperand),
        }
    }
}


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
