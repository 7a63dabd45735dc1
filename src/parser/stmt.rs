use crate::ast::ast::Block;
use crate::ast::expressions::{Expr, OpKind};
use crate::ast::statements::{LoopGuardKind, Stmt};
use crate::ast::types::{Constant, Identifier};
use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::tokens::tokens::TokenKind;

use super::expr::{parse_expr, parse_identifier};
use super::lookups::is_block_terminator;
use super::parser::Parser;
use super::types::parse_type;

/// Block = { Stmt }, ended by a block-closing keyword or EOF. The
/// terminator is left for the caller to consume.
pub fn parse_block(parser: &mut Parser) -> Result<Block, ParseError> {
    let mut stmts = vec![];

    while !is_block_terminator(parser.current_token_kind()) {
        stmts.push(parse_stmt(parser)?);
    }

    Ok(Block::new(stmts))
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    // Identifier-led statements need one more token of lookahead to
    // tell a cast, assignment, declaration, or deallocation from a
    // plain expression statement.
    if parser.peek(TokenKind::Identifier) {
        if parser.peek_next(TokenKind::IsNowA) {
            return parse_cast_stmt(parser);
        }
        if parser.peek_next(TokenKind::R) {
            return parse_assignment_stmt(parser);
        }
        if parser.peek_next(TokenKind::HasA) {
            return parse_declaration_stmt(parser);
        }
        if parser.peek_next(TokenKind::RNoob) {
            return parse_deallocation_stmt(parser);
        }
    }

    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Expr(expr))
}

/// Print = VISIBLE Expr { Expr } [ ! ] NEWLINE
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();

    let mut args = vec![parse_expr(parser)?];
    while !parser.peek(TokenKind::Bang) && !parser.peek(TokenKind::Newline) {
        args.push(parse_expr(parser)?);
    }

    let suppress_newline = parser.accept(TokenKind::Bang);
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Print {
        args,
        suppress_newline,
    })
}

/// Input = GIMMEH Ident NEWLINE
pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();

    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Input { target })
}

/// If = O RLY? NEWLINE YA RLY NEWLINE Block
///      { MEBBE Expr NEWLINE Block }
///      [ NO WAI NEWLINE Block ]
///      OIC NEWLINE
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    parser.expect(TokenKind::Newline)?;
    parser.expect(TokenKind::Yarly)?;
    parser.expect(TokenKind::Newline)?;

    let yes = parse_block(parser)?;

    let mut guards = vec![];
    let mut blocks = vec![];
    while parser.accept(TokenKind::Mebbe) {
        guards.push(parse_expr(parser)?);
        parser.expect(TokenKind::Newline)?;
        blocks.push(parse_block(parser)?);
    }

    let no = if parser.accept(TokenKind::Nowai) {
        parser.expect(TokenKind::Newline)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Oic)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::IfThenElse {
        yes,
        no,
        guards,
        blocks,
    })
}

/// Switch = WTF? NEWLINE (OMG Expr NEWLINE Block)+
///          [ OMGWTF NEWLINE Block ]
///          OIC NEWLINE
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    parser.expect(TokenKind::Newline)?;

    if !parser.peek(TokenKind::Omg) {
        return Err(ParseError::new(
            ParseErrorKind::MissingCase,
            parser.current_position(),
        ));
    }

    let mut guards = vec![];
    let mut blocks = vec![];
    while parser.accept(TokenKind::Omg) {
        guards.push(parse_expr(parser)?);
        parser.expect(TokenKind::Newline)?;
        blocks.push(parse_block(parser)?);
    }

    let default = if parser.accept(TokenKind::Omgwtf) {
        parser.expect(TokenKind::Newline)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Oic)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Switch {
        guards,
        blocks,
        default,
    })
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Break)
}

/// Return = FOUND YR Expr NEWLINE
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Return(value))
}

/// Loop = IM IN YR Ident [ LoopUpd ] [ LoopGuard ] NEWLINE
///        Block
///        IM OUTTA YR Ident NEWLINE
///
/// A loop update is present when the next token is UPPIN, NERFIN, or an
/// identifier naming a previously declared unary function. UPPIN and
/// NERFIN desugar to add-one and subtract-one operations on the loop
/// variable; a unary function becomes a call with the variable as its
/// argument.
pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();

    let name = parse_identifier(parser)?;

    let mut var = None;
    let mut update = None;
    match parser.current_token_kind() {
        TokenKind::Uppin | TokenKind::Nerfin => {
            let op = if parser.advance().kind == TokenKind::Uppin {
                OpKind::Add
            } else {
                OpKind::Sub
            };
            parser.expect(TokenKind::Yr)?;
            let target = parse_identifier(parser)?;
            update = Some(Expr::Op(
                op,
                vec![
                    Expr::Identifier(target.clone()),
                    Expr::Constant(Constant::Integer(1)),
                ],
            ));
            var = Some(target);
        }
        TokenKind::Identifier => {
            // only an identifier naming a known unary function starts
            // an update; anything else falls through to the guard
            let scope_image = parser.unary_function_scope(parser.current_token().value.as_str());
            if let Some(scope_image) = scope_image {
                let func = parse_identifier(parser)?;
                parser.expect(TokenKind::Yr)?;
                let target = parse_identifier(parser)?;
                let scope = Identifier::new(scope_image, func.position.clone());
                update = Some(Expr::FuncCall {
                    scope,
                    name: func,
                    args: vec![Expr::Identifier(target.clone())],
                });
                var = Some(target);
            }
        }
        _ => {}
    }

    let guard = if parser.accept(TokenKind::Til) {
        Some((LoopGuardKind::Until, parse_expr(parser)?))
    } else if parser.accept(TokenKind::Wile) {
        Some((LoopGuardKind::While, parse_expr(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::Newline)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::ImOuttaYr)?;

    let close = parse_identifier(parser)?;
    if close.image != name.image {
        return Err(ParseError::new(
            ParseErrorKind::MismatchedLoopName {
                expected: name.image,
                found: close.image,
            },
            close.position,
        ));
    }
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Loop {
        name,
        var,
        update,
        guard,
        body,
    })
}

/// Dealloc = Ident R NOOB NEWLINE
pub fn parse_deallocation_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::RNoob)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Deallocation { target })
}

/// FuncDef = HOW IZ Ident Ident [ YR Ident { AN YR Ident } ] NEWLINE
///           Block IF U SAY SO NEWLINE
///
/// The function is registered the moment the header has been parsed,
/// before the body, so the body may already use it as a loop update.
pub fn parse_funcdef_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();

    let scope = parse_identifier(parser)?;
    let name = parse_identifier(parser)?;

    let mut params = vec![];
    if parser.accept(TokenKind::Yr) {
        params.push(parse_identifier(parser)?);
        while parser.accept(TokenKind::AnYr) {
            params.push(parse_identifier(parser)?);
        }
    }

    parser.register_function(&scope, &name, params.len());

    parser.expect(TokenKind::Newline)?;
    let body = parse_block(parser)?;
    parser.expect(TokenKind::IfUSaySo)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::FuncDef {
        scope,
        name,
        params,
        body,
    })
}

/// Cast = Ident IS NOW A Type NEWLINE
pub fn parse_cast_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::IsNowA)?;
    let newtype = parse_type(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Cast { target, newtype })
}

/// Assign = Ident R Expr NEWLINE
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::R)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Assignment { target, value })
}

/// Decl = Ident HAS A Ident [ ITZ Expr | ITZ A Type ] NEWLINE
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let scope = parse_identifier(parser)?;
    parser.expect(TokenKind::HasA)?;
    let target = parse_identifier(parser)?;

    let mut init = None;
    let mut declared_type = None;
    if parser.accept(TokenKind::Itz) {
        init = Some(parse_expr(parser)?);
    } else if parser.accept(TokenKind::ItzA) {
        declared_type = Some(parse_type(parser)?);
    }

    // an initial value and a declared type are mutually exclusive
    if parser.peek(TokenKind::Itz) || parser.peek(TokenKind::ItzA) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDeclaration {
                target: target.image,
            },
            parser.current_position(),
        ));
    }

    parser.expect(TokenKind::Newline)?;

    Ok(Stmt::Declaration {
        scope,
        target,
        init,
        declared_type,
    })
}
