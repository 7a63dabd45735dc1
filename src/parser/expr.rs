use crate::ast::expressions::{Expr, OpKind};
use crate::ast::types::{Constant, Identifier};
use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::tokens::tokens::TokenKind;

use super::parser::Parser;
use super::types::parse_type;

/// Every expression's form is decided by its leading token; a token
/// with no registered handler cannot start an expression.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let kind = parser.current_token_kind();
    if kind == TokenKind::EOF {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            parser.current_position(),
        ));
    }

    let handler = parser.get_expr_lookup().get(&kind).copied();
    match handler {
        Some(handler) => handler(parser),
        None => Err(ParseError::new(
            ParseErrorKind::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.current_position(),
        )),
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, ParseError> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Identifier::new(token.value, token.position))
}

pub fn parse_constant_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.advance().clone();
    let constant = match token.kind {
        TokenKind::Integer => {
            let value = token.value.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )
            })?;
            Constant::Integer(value)
        }
        TokenKind::Float => {
            let value = token.value.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )
            })?;
            Constant::Float(value)
        }
        TokenKind::Boolean => Constant::Boolean(token.value == "WIN"),
        TokenKind::String => Constant::String(token.value),
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { token: token.value },
                token.position,
            ))
        }
    };

    Ok(Expr::Constant(constant))
}

pub fn parse_implicit_var_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.advance();
    Ok(Expr::ImplicitVar)
}

/// Cast = MAEK Expr A Type
pub fn parse_cast_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.advance();

    let target = parse_expr(parser)?;
    parser.expect(TokenKind::A)?;
    let newtype = parse_type(parser)?;

    Ok(Expr::Cast(Box::new(target), newtype))
}

/// UnaryOp = NOT Expr
pub fn parse_unary_op_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.advance();

    let operand = parse_expr(parser)?;

    Ok(Expr::Op(OpKind::Not, vec![operand]))
}

/// BinOp = BinKw Expr [ AN ] Expr
pub fn parse_binary_op_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.advance().clone();
    let op = match token.kind {
        TokenKind::SumOf => OpKind::Add,
        TokenKind::DiffOf => OpKind::Sub,
        TokenKind::ProduktOf => OpKind::Mult,
        TokenKind::QuoshuntOf => OpKind::Div,
        TokenKind::ModOf => OpKind::Mod,
        TokenKind::BiggrOf => OpKind::Max,
        TokenKind::SmallrOf => OpKind::Min,
        TokenKind::BothOf => OpKind::And,
        TokenKind::EitherOf => OpKind::Or,
        TokenKind::WonOf => OpKind::Xor,
        TokenKind::BothSaem => OpKind::Eq,
        TokenKind::Diffrint => OpKind::Neq,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { token: token.value },
                token.position,
            ))
        }
    };

    let lhs = parse_expr(parser)?;
    parser.accept(TokenKind::An);
    let rhs = parse_expr(parser)?;

    Ok(Expr::Op(op, vec![lhs, rhs]))
}

/// NaryOp = NaryKw Expr { [ AN ] Expr } MKAY
///
/// At least two arguments are required, so the first round of the loop
/// demands an expression before MKAY is considered.
pub fn parse_nary_op_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.advance().clone();
    let op = match token.kind {
        TokenKind::AllOf => OpKind::And,
        TokenKind::AnyOf => OpKind::Or,
        TokenKind::Smoosh => OpKind::Cat,
        _ => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { token: token.value },
                token.position,
            ))
        }
    };

    let mut args = vec![parse_expr(parser)?];
    loop {
        parser.accept(TokenKind::An);
        args.push(parse_expr(parser)?);
        if parser.accept(TokenKind::Mkay) {
            break;
        }
    }

    Ok(Expr::Op(op, args))
}

/// An identifier followed by IZ starts a function call; otherwise it is
/// a plain variable reference.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    if parser.peek_next(TokenKind::Iz) {
        return parse_func_call_expr(parser);
    }

    Ok(Expr::Identifier(parse_identifier(parser)?))
}

/// FuncCall = Ident IZ Ident [ YR Expr { [ AN ] YR Expr } ] MKAY
///
/// Scanners fold "AN YR" between arguments into one token; the loop
/// accepts the folded form and the separate AN and YR tokens alike.
pub fn parse_func_call_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let scope = parse_identifier(parser)?;
    parser.expect(TokenKind::Iz)?;
    let name = parse_identifier(parser)?;

    let mut args = vec![];
    if parser.accept(TokenKind::Yr) {
        args.push(parse_expr(parser)?);
        loop {
            if parser.accept(TokenKind::AnYr) {
                args.push(parse_expr(parser)?);
            } else if parser.accept(TokenKind::An) {
                parser.expect(TokenKind::Yr)?;
                args.push(parse_expr(parser)?);
            } else if parser.accept(TokenKind::Yr) {
                args.push(parse_expr(parser)?);
            } else {
                break;
            }
        }
    }
    parser.expect(TokenKind::Mkay)?;

    Ok(Expr::FuncCall { scope, name, args })
}
