use std::fmt::{self, Display};

use crate::Position;

/// A name occurring in source, together with where it occurred.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub image: String,
    pub position: Position,
}

impl Identifier {
    pub fn new(image: String, position: Position) -> Self {
        Identifier { image, position }
    }
}

/// Identifiers compare by image alone. The position is diagnostic
/// metadata; two mentions of the same name are the same identifier.
impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.image == other.image
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.image)
    }
}

/// A variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Type::Noob => "NOOB",
            Type::Troof => "TROOF",
            Type::Numbr => "NUMBR",
            Type::Numbar => "NUMBAR",
            Type::Yarn => "YARN",
        };
        write!(f, "{}", keyword)
    }
}

/// A literal value. `Nil` completes the value domain for consumers but
/// has no literal surface form, so the parser never produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Nil,
}

impl Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(value) => write!(f, "{}", value),
            Constant::Float(value) => {
                // keep a decimal point so the image re-scans as a float
                if value.fract() == 0.0 {
                    write!(f, "{:.1}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Constant::Boolean(true) => write!(f, "WIN"),
            Constant::Boolean(false) => write!(f, "FAIL"),
            Constant::String(value) => write!(f, "\"{}\"", value),
            Constant::Nil => write!(f, "NOOB"),
        }
    }
}
