//! Grammar for Lispy programs and the parser that applies it.
//!
//! ```text
//! integer   = ['-'] digit+
//! float     = ['-'] digit+ '.' digit+
//! symbol    = '+' | '-' | '*' | '/' | '%'
//! sexpr     = '(' expr* ')'
//! expr      = float | integer | symbol | sexpr
//! program   = ^ expr* $
//! ```

// Public exports.
pub use parse_tree::ParseTree;
pub use parser::{Parser, MAX_DEPTH};
pub use rule::{Expectation, Rule};
pub use syntax_error::{SyntaxError, SyntaxErrorReason};

// Public mods.
pub mod parse_tree;
pub mod rule;
pub mod syntax_error;

// Private mods.
mod parser;
