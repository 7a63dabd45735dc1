use std::fmt::Display;
use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod tokens;

/// A source location: 1-based line number plus the name of the file the
/// line came from. File names are shared behind an `Rc` so every token
/// and AST node can carry one cheaply.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}
