use std::fmt;

use derive_getters::Getters;

use super::rule::Expectation;

use self::SyntaxErrorReason::*;


/// Input that does not match the grammar. The whole line is rejected.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct SyntaxError {
    reason: SyntaxErrorReason,
    offset: usize,
    // 1-based; col counts chars, not bytes.
    line: usize,
    col: usize,
    found: Option<char>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxErrorReason {
    /// Sorted and deduplicated.
    Expected(Vec<Expectation>),
    DepthOverflow(usize),
}

impl SyntaxError {
    pub fn new(reason: SyntaxErrorReason, source: &str, offset: usize) -> Self {
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..].chars().count() + 1;

        Self {
            reason,
            offset,
            line,
            col,
            found: source[offset..].chars().next(),
        }
    }
}


impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<stdin>:{}:{}: error: ", self.line, self.col)?;
        match &self.reason {
            Expected(expected) => {
                write!(f, "expected ")?;
                for (i, expectation) in expected.iter().enumerate() {
                    if i > 0 {
                        if i + 1 == expected.len() {
                            write!(f, " or ")?;
                        } else {
                            write!(f, ", ")?;
                        }
                    }
                    write!(f, "{}", expectation)?;
                }
                match self.found {
                    Some(c) => write!(f, " at {:?}", c),
                    None => write!(f, " at end of input"),
                }
            }
            DepthOverflow(max_depth) => write!(f, "nesting deeper than {} levels", max_depth),
        }
    }
}

impl std::error::Error for SyntaxError {}
