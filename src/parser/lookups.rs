use std::collections::HashMap;

use crate::ast::expressions::Expr;
use crate::ast::statements::Stmt;
use crate::errors::errors::ParseError;
use crate::tokens::tokens::TokenKind;

use super::expr::*;
use super::parser::Parser;
use super::stmt::*;

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, ParseError>;
pub type ExprHandler = fn(&mut Parser) -> Result<Expr, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements led by a keyword. Identifier-led statements are
    // disambiguated in parse_stmt instead.
    parser.stmt(TokenKind::Visible, parse_print_stmt);
    parser.stmt(TokenKind::Gimmeh, parse_input_stmt);
    parser.stmt(TokenKind::Orly, parse_if_stmt);
    parser.stmt(TokenKind::Wtf, parse_switch_stmt);
    parser.stmt(TokenKind::Gtfo, parse_break_stmt);
    parser.stmt(TokenKind::FoundYr, parse_return_stmt);
    parser.stmt(TokenKind::ImInYr, parse_loop_stmt);
    parser.stmt(TokenKind::HowIz, parse_funcdef_stmt);

    // Constants
    parser.expr(TokenKind::Integer, parse_constant_expr);
    parser.expr(TokenKind::Float, parse_constant_expr);
    parser.expr(TokenKind::Boolean, parse_constant_expr);
    parser.expr(TokenKind::String, parse_constant_expr);

    parser.expr(TokenKind::It, parse_implicit_var_expr);
    parser.expr(TokenKind::Maek, parse_cast_expr);
    parser.expr(TokenKind::Not, parse_unary_op_expr);

    // N-ary operators, MKAY-terminated
    parser.expr(TokenKind::Smoosh, parse_nary_op_expr);
    parser.expr(TokenKind::AllOf, parse_nary_op_expr);
    parser.expr(TokenKind::AnyOf, parse_nary_op_expr);

    // Binary operators
    parser.expr(TokenKind::SumOf, parse_binary_op_expr);
    parser.expr(TokenKind::DiffOf, parse_binary_op_expr);
    parser.expr(TokenKind::ProduktOf, parse_binary_op_expr);
    parser.expr(TokenKind::QuoshuntOf, parse_binary_op_expr);
    parser.expr(TokenKind::ModOf, parse_binary_op_expr);
    parser.expr(TokenKind::BiggrOf, parse_binary_op_expr);
    parser.expr(TokenKind::SmallrOf, parse_binary_op_expr);
    parser.expr(TokenKind::BothOf, parse_binary_op_expr);
    parser.expr(TokenKind::EitherOf, parse_binary_op_expr);
    parser.expr(TokenKind::WonOf, parse_binary_op_expr);
    parser.expr(TokenKind::BothSaem, parse_binary_op_expr);
    parser.expr(TokenKind::Diffrint, parse_binary_op_expr);

    // Variable references and function calls
    parser.expr(TokenKind::Identifier, parse_identifier_expr);
}

/// The parser's block-closing vocabulary: any of these ends the block
/// under construction without being consumed.
pub fn is_block_terminator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Kthxbye
            | TokenKind::Oic
            | TokenKind::Yarly
            | TokenKind::Nowai
            | TokenKind::Mebbe
            | TokenKind::Omg
            | TokenKind::Omgwtf
            | TokenKind::ImOuttaYr
            | TokenKind::IfUSaySo
            | TokenKind::EOF
    )
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type ExprLookup = HashMap<TokenKind, ExprHandler>;
