//! Unit tests for error handling.
//!
//! This module contains tests for error construction, accessors, and
//! display formatting.

use std::rc::Rc;

use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::Position;

fn at(line: u32) -> Position {
    Position(line, Rc::new(String::from("test.lol")))
}

#[test]
fn test_error_creation() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            token: String::from("MKAY"),
        },
        at(10),
    );

    assert!(matches!(
        error.kind(),
        ParseErrorKind::UnexpectedToken { token } if token == "MKAY"
    ));
}

#[test]
fn test_error_position() {
    let error = ParseError::new(ParseErrorKind::UnexpectedEof, at(42));

    assert_eq!(error.position().0, 42);
    assert_eq!(error.position().1.as_str(), "test.lol");
}

#[test]
fn test_error_display_includes_location() {
    let error = ParseError::new(ParseErrorKind::MissingCase, at(3));

    assert_eq!(error.to_string(), "test.lol:3: switch contains no OMG case");
}

#[test]
fn test_mismatched_loop_name_message() {
    let error = ParseError::new(
        ParseErrorKind::MismatchedLoopName {
            expected: String::from("LOOPY"),
            found: String::from("OTHER"),
        },
        at(7),
    );

    let message = error.to_string();
    assert!(message.contains("LOOPY"));
    assert!(message.contains("OTHER"));
}

#[test]
fn test_invalid_declaration_message() {
    let error = ParseError::new(
        ParseErrorKind::InvalidDeclaration {
            target: String::from("X"),
        },
        at(2),
    );

    assert!(error.to_string().contains("initial value"));
}

#[test]
fn test_detailed_unexpected_token_message() {
    let error = ParseError::new(
        ParseErrorKind::UnexpectedTokenDetailed {
            token: String::from("OIC"),
            message: String::from("expected Newline"),
        },
        at(5),
    );

    let message = error.to_string();
    assert!(message.contains("OIC"));
    assert!(message.contains("expected Newline"));
}
