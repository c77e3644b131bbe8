//! Raw output of the parser, consumed by the tree builder.

use std::fmt;

use derive_getters::Getters;

use super::rule::Rule;


#[derive(Clone, Debug, Getters, PartialEq)]
pub struct ParseTree {
    tag: Rule,
    /// Matched text of a leaf; empty for composite nodes and anchors.
    contents: String,
    /// Byte offset into the source where the node starts.
    offset: usize,
    children: Vec<ParseTree>,
}

impl ParseTree {
    pub fn leaf<S: Into<String>>(tag: Rule, contents: S, offset: usize) -> Self {
        Self {
            tag,
            contents: contents.into(),
            offset,
            children: Vec::new(),
        }
    }

    pub fn node(tag: Rule, offset: usize, children: Vec<ParseTree>) -> Self {
        Self {
            tag,
            contents: String::new(),
            offset,
            children,
        }
    }

    pub fn into_children(self) -> Vec<ParseTree> {
        self.children
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{}{}", "  ".repeat(indent), self.tag)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, indent + 1)?;
        }
        Ok(())
    }
}


impl fmt::Display for ParseTree {
    /// One node per line, children indented under their parent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
