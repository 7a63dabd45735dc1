use std::fmt::{self, Display};
use std::slice::Iter;

use super::statements::Stmt;

/// An ordered sequence of statements, delimited by the surrounding
/// construct's opening keyword and one of the block-closing keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.stmts.iter()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub(crate) fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        for stmt in &self.stmts {
            stmt.fmt_indented(f, indent)?;
        }
        Ok(())
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// The program root. Owns the entire tree; dropping it releases every
/// node transitively.
#[derive(Debug, Clone, PartialEq)]
pub struct Main {
    pub block: Block,
}

impl Main {
    pub fn new(block: Block) -> Self {
        Main { block }
    }
}

impl Display for Main {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the version constant is not retained in the tree, so the
        // canonical greeting is printed
        writeln!(f, "HAI 1.2")?;
        self.block.fmt_indented(f, 0)?;
        writeln!(f, "KTHXBYE")
    }
}
