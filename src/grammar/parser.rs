//! Recursive-descent parser for the Lispy grammar.
//!
//! Alternatives are ordered and backtrack freely, PEG-style. Errors are
//! reported at the farthest offset any terminal failed at, along with
//! everything that would have been accepted there.

use std::collections::BTreeSet;

use derive_getters::Getters;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::parse_tree::ParseTree;
use super::rule::{Expectation, Rule};
use super::syntax_error::{SyntaxError, SyntaxErrorReason};

pub const MAX_DEPTH: usize = 128;

lazy_static! {
    static ref FLOAT: Regex = Regex::new(r"^-?[0-9]+\.[0-9]+").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+").unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^[-+*/%]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();
}


/// Immutable once built; may be reused for any number of parses.
#[derive(Clone, Debug, Getters)]
pub struct Parser {
    max_depth: usize,
}

// Per-call state.
struct ParseState<'a> {
    source: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,

    furthest: usize,
    expected: BTreeSet<Expectation>,
}

// Failure that is not subject to backtracking.
enum Fatal {
    DepthOverflow(usize),
}

type Parsed = Result<Option<ParseTree>, Fatal>;


impl Parser {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn parse(&self, source: &str) -> Result<ParseTree, SyntaxError> {
        trace!("Parsing {} bytes", source.len());
        let mut state = ParseState::new(source, self.max_depth);
        let err = match state.program() {
            Ok(Some(tree)) => return Ok(tree),
            Ok(None) => SyntaxError::new(
                SyntaxErrorReason::Expected(state.expected.into_iter().collect()),
                source,
                state.furthest,
            ),
            Err(Fatal::DepthOverflow(offset)) => {
                SyntaxError::new(SyntaxErrorReason::DepthOverflow(self.max_depth), source, offset)
            }
        };
        debug!("Rejected input: {}", err);
        Err(err)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}


impl<'a> ParseState<'a> {
    fn new(source: &'a str, max_depth: usize) -> Self {
        Self {
            source,
            pos: 0,
            depth: 0,
            max_depth,

            furthest: 0,
            expected: Default::default(),
        }
    }

    // program = ^ expr* $
    fn program(&mut self) -> Parsed {
        let mut children = vec![ParseTree::leaf(Rule::Anchor, "", 0)];
        children.extend(self.exprs()?);

        self.skip_whitespace();
        if self.pos < self.source.len() {
            self.fail(Expectation::End);
            return Ok(None);
        }
        children.push(ParseTree::leaf(Rule::Anchor, "", self.pos));

        Ok(Some(ParseTree::node(Rule::Program, 0, children)))
    }

    fn exprs(&mut self) -> Result<Vec<ParseTree>, Fatal> {
        let mut exprs = Vec::new();
        while let Some(expr) = self.expr()? {
            exprs.push(expr);
        }
        Ok(exprs)
    }

    // expr = float | integer | symbol | sexpr
    fn expr(&mut self) -> Parsed {
        self.skip_whitespace();

        let terminals: [(Rule, &Regex, Expectation); 3] = [
            (Rule::Float, &*FLOAT, Expectation::Float),
            (Rule::Integer, &*INTEGER, Expectation::Integer),
            (Rule::Symbol, &*SYMBOL, Expectation::Symbol),
        ];
        for (rule, regex, expectation) in terminals.iter() {
            if let Some(leaf) = self.terminal(*rule, regex, *expectation) {
                return Ok(Some(leaf));
            }
        }

        self.sexpr()
    }

    // sexpr = '(' expr* ')'
    fn sexpr(&mut self) -> Parsed {
        let start = self.pos;
        let open = match self.paren('(', Expectation::Open) {
            Some(open) => open,
            None => return Ok(None),
        };
        if self.depth >= self.max_depth {
            return Err(Fatal::DepthOverflow(start));
        }

        self.depth += 1;
        let exprs = self.exprs();
        self.depth -= 1;

        let mut children = vec![open];
        children.extend(exprs?);

        self.skip_whitespace();
        match self.paren(')', Expectation::Close) {
            Some(close) => {
                children.push(close);
                Ok(Some(ParseTree::node(Rule::SExpr, start, children)))
            }
            None => {
                self.pos = start;
                Ok(None)
            }
        }
    }

    fn terminal(
        &mut self,
        rule: Rule,
        regex: &Regex,
        expectation: Expectation,
    ) -> Option<ParseTree> {
        match regex.find(&self.source[self.pos..]) {
            Some(m) => {
                let leaf = ParseTree::leaf(rule, m.as_str(), self.pos);
                self.pos += m.end();
                Some(leaf)
            }
            None => {
                self.fail(expectation);
                None
            }
        }
    }

    fn paren(&mut self, paren: char, expectation: Expectation) -> Option<ParseTree> {
        if self.source[self.pos..].starts_with(paren) {
            let leaf = ParseTree::leaf(Rule::Paren, paren, self.pos);
            self.pos += paren.len_utf8();
            Some(leaf)
        } else {
            self.fail(expectation);
            None
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(m) = WHITESPACE.find(&self.source[self.pos..]) {
            self.pos += m.end();
        }
    }

    fn fail(&mut self, expectation: Expectation) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest {
            self.expected.insert(expectation);
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
