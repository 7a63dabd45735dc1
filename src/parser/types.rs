use crate::ast::types::Type;
use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::tokens::tokens::TokenKind;

use super::parser::Parser;

/// Type = NOOB | TROOF | NUMBR | NUMBAR | YARN
pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    let parsed = match parser.current_token_kind() {
        TokenKind::Noob => Type::Noob,
        TokenKind::Troof => Type::Troof,
        TokenKind::Numbr => Type::Numbr,
        TokenKind::Numbar => Type::Numbar,
        TokenKind::Yarn => Type::Yarn,
        TokenKind::EOF => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                parser.current_position(),
            ))
        }
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type"),
                },
                parser.current_position(),
            ))
        }
    };
    parser.advance();

    Ok(parsed)
}
