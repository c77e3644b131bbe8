//! Table of built-in operators.

use lazy_static::lazy_static;

use std::collections::HashMap;
use std::fmt;

use crate::number::{NumResult, Number};

macro_rules! builtins {
    [$($n:tt : $x:expr),* $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $n,
                    BuiltIn {
                        name: stringify!($x),
                        fun: $x,
                    },
                );
            )*
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        "%": rem,
    ];
}


/// Binary numeric operator.
pub struct BuiltIn {
    name: &'static str,
    fun: fn(Number, Number) -> NumResult,
}

impl BuiltIn {
    pub fn lookup(symbol: &str) -> Option<&'static BuiltIn> {
        BUILTINS.get(symbol)
    }

    pub fn apply(&self, a: Number, b: Number) -> NumResult {
        (self.fun)(a, b)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


fn add(a: Number, b: Number) -> NumResult {
    a.checked_add(b)
}

fn sub(a: Number, b: Number) -> NumResult {
    a.checked_sub(b)
}

fn mul(a: Number, b: Number) -> NumResult {
    a.checked_mul(b)
}

fn div(a: Number, b: Number) -> NumResult {
    a.checked_div(b)
}

fn rem(a: Number, b: Number) -> NumResult {
    a.checked_rem(b)
}


#[cfg(test)]
#[path = "./builtin_test.rs"]
mod builtin_test;
