//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ast: Program root and block composites
//! - expressions: Expression variants and operators
//! - statements: Statement variants
//! - types: Identifiers, variable types, and constants
//!
//! Every node is built once during parsing and owned by its parent;
//! dropping the `Main` root releases the whole tree. The `Display`
//! implementations emit canonical LOLCODE surface syntax, so a parsed
//! program can be printed and re-parsed into a structurally equal tree.

pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
