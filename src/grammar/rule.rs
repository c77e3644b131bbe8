use std::fmt;


/// Tag of a ParseTree node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rule {
    Program,
    SExpr,
    Float,
    Integer,
    Symbol,
    /// '(' or ')'.
    Paren,
    /// Zero-width start or end of input.
    Anchor,
}

/// What the parser would have accepted at a failure point.
///
/// Ordered as the alternatives are tried, which is also the order they are
/// reported in.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Expectation {
    Float,
    Integer,
    Symbol,
    Open,
    Close,
    End,
}

impl Rule {
    /// Whether the tree builder skips nodes of this rule.
    pub fn is_structural(&self) -> bool {
        matches!(self, Rule::Paren | Rule::Anchor)
    }
}


impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Program => "program",
            Rule::SExpr => "sexpr",
            Rule::Float => "float",
            Rule::Integer => "integer",
            Rule::Symbol => "symbol",
            Rule::Paren => "paren",
            Rule::Anchor => "anchor",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expectation::Float => "float",
            Expectation::Integer => "integer",
            Expectation::Symbol => "symbol",
            Expectation::Open => "'('",
            Expectation::Close => "')'",
            Expectation::End => "end of input",
        };
        write!(f, "{}", name)
    }
}
