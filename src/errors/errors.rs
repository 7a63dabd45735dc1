use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A parse failure: what went wrong and where.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        ParseError { kind, position }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.kind)
    }
}

impl std::error::Error for ParseError {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of token stream")]
    UnexpectedEof,
    #[error("loop closed with {found:?}, expected {expected:?}")]
    MismatchedLoopName { expected: String, found: String },
    #[error("declaration of {target:?} supplies both an initial value and a type")]
    InvalidDeclaration { target: String },
    #[error("switch contains no OMG case")]
    MissingCase,
    #[error("error parsing number: {token:?}")]
    InvalidNumber { token: String },
}
