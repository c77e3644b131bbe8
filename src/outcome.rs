//! Result of one parse-evaluate cycle.

use std::fmt;

use crate::grammar::SyntaxError;
use crate::lang_err::LangErr;
use crate::value::Value;


#[derive(Clone, Debug, PartialEq)]
pub enum EvalOutcome {
    /// Anything but an Error. Normally a number, but a lone Symbol or the
    /// empty S-exp pass through evaluation unchanged.
    Value(Value),
    Error(LangErr),
    Syntax(SyntaxError),
}

impl EvalOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, EvalOutcome::Value(_))
    }

    /// Single line of output, with Floats at the given precision.
    pub fn render(&self, precision: usize) -> String {
        match self {
            EvalOutcome::Value(value) => format!("{:.*}", precision, value),
            EvalOutcome::Error(err) => format!("Error: {}", err),
            EvalOutcome::Syntax(err) => err.to_string(),
        }
    }
}

impl From<Value> for EvalOutcome {
    fn from(value: Value) -> Self {
        match value {
            Value::Error(err) => EvalOutcome::Error(err),
            value => EvalOutcome::Value(value),
        }
    }
}

impl From<SyntaxError> for EvalOutcome {
    fn from(err: SyntaxError) -> Self {
        EvalOutcome::Syntax(err)
    }
}


impl fmt::Display for EvalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "{}", self.render(precision))
    }
}
