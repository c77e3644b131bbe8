//! Lispy: a small s-expression calculator.
//!
//! Text is parsed into a ParseTree, built into a Value tree, and reduced to a
//! single number or error:
//!
//! ```
//! use lispy::prelude::*;
//!
//! assert_eq!(parse_and_evaluate("(+ 1 (* 2 3))"), EvalOutcome::Value(Value::Integer(7)));
//! ```

use derive_getters::Getters;
use log::debug;

use crate::grammar::{ParseTree, Parser, SyntaxError};
use crate::outcome::EvalOutcome;


pub mod builder;
pub mod builtin;
pub mod grammar;
pub mod interpreter;
pub mod lang_err;
pub mod number;
pub mod outcome;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub mod prelude {
    pub use crate::grammar::{ParseTree, Parser, SyntaxError};
    pub use crate::lang_err::LangErr;
    pub use crate::number::Number;
    pub use crate::outcome::EvalOutcome;
    pub use crate::value::Value;
    pub use crate::{parse, parse_and_evaluate, Config, Lispy};
}


/// Settings for a Lispy session.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Config {
    /// Fractional digits used when rendering Floats.
    float_precision: usize,
    /// Deepest S-exp nesting the parser accepts.
    max_depth: usize,
}

/// Parser plus config; reusable across any number of lines.
#[derive(Clone, Debug, Getters)]
pub struct Lispy {
    parser: Parser,
    config: Config,
}


impl Config {
    pub fn new(float_precision: usize, max_depth: usize) -> Self {
        Self {
            float_precision,
            max_depth,
        }
    }

    pub fn with_float_precision(mut self, float_precision: usize) -> Self {
        self.float_precision = float_precision;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(6, grammar::MAX_DEPTH)
    }
}

impl Lispy {
    pub fn new(config: Config) -> Self {
        Self {
            parser: Parser::new(config.max_depth),
            config,
        }
    }

    pub fn parse(&self, line: &str) -> Result<ParseTree, SyntaxError> {
        self.parser.parse(line)
    }

    pub fn parse_and_evaluate(&self, line: &str) -> EvalOutcome {
        let tree = match self.parse(line) {
            Ok(tree) => tree,
            Err(err) => return err.into(),
        };
        let value = builder::build(tree);
        debug!("Evaluating {}", value);
        interpreter::eval(value).into()
    }

    pub fn render(&self, outcome: &EvalOutcome) -> String {
        outcome.render(self.config.float_precision)
    }
}

impl Default for Lispy {
    fn default() -> Self {
        Self::new(Config::default())
    }
}


/// Parses with the default configuration.
pub fn parse(text: &str) -> Result<ParseTree, SyntaxError> {
    Parser::default().parse(text)
}

/// Parses and evaluates one line with the default configuration.
pub fn parse_and_evaluate(line: &str) -> EvalOutcome {
    Lispy::default().parse_and_evaluate(line)
}
