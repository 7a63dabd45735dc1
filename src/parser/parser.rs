use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::ast::Main;
use crate::ast::types::Identifier;
use crate::errors::errors::{ParseError, ParseErrorKind};
use crate::tokens::tokens::{Token, TokenKind};
use crate::Position;

use super::lookups::{create_token_lookups, ExprHandler, ExprLookup, StmtHandler, StmtLookup};
use super::stmt::parse_block;

/// Forward-only cursor over the token stream, plus the dispatch tables
/// and the function-name registry a single parse needs. All of it is
/// local to one parse invocation. The registry keeps registration
/// order so lookups resolve the same way on every run.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
    stmt_lookup: StmtLookup,
    expr_lookup: ExprLookup,
    funcs: Vec<((String, String), usize)>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        // the grammar relies on a terminated stream; repair one that
        // arrives without its EOF token
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::EOF) {
            let line = tokens.last().map(|token| token.position.0).unwrap_or(1);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                position: Position(line, Rc::clone(&file)),
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            expr_lookup: HashMap::new(),
            funcs: vec![],
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    pub fn current_position(&self) -> Position {
        self.current_token().position.clone()
    }

    /// Returns the current token and moves past it. The cursor never
    /// advances beyond the EOF token.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if self.tokens[pos].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    /// True if the current token has the given kind. Does not advance.
    pub fn peek(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// True if the token after the current one has the given kind.
    /// Identifier-led statements need this second lookahead slot.
    pub fn peek_next(&self, kind: TokenKind) -> bool {
        matches!(self.tokens.get(self.pos + 1), Some(token) if token.kind == kind)
    }

    /// Advances past the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the current token to have the given kind and advances
    /// past it, or reports an error at the current token.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek(kind) {
            return Ok(self.advance().clone());
        }
        if self.peek(TokenKind::EOF) {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                self.current_position(),
            ));
        }
        Err(ParseError::new(
            ParseErrorKind::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: format!("expected {}", kind),
            },
            self.current_position(),
        ))
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_expr_lookup(&self) -> &ExprLookup {
        &self.expr_lookup
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn expr(&mut self, kind: TokenKind, expr_fn: ExprHandler) {
        self.expr_lookup.insert(kind, expr_fn);
    }

    /// Records a function as soon as its header has been parsed, so
    /// loop updates further down can recognize it by name.
    pub fn register_function(&mut self, scope: &Identifier, name: &Identifier, arity: usize) {
        self.funcs
            .push(((scope.image.clone(), name.image.clone()), arity));
    }

    /// Looks for a unary function with the given name and returns the
    /// image of the scope it was declared in. When several scopes
    /// declare one, the most recent registration wins.
    pub fn unary_function_scope(&self, name: &str) -> Option<String> {
        self.funcs
            .iter()
            .rev()
            .find(|((_, func), arity)| func.as_str() == name && *arity == 1)
            .map(|((scope, _), _)| scope.clone())
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Parses a complete token stream into a program. The first mismatch
/// aborts the parse; nothing partially built escapes.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Main, ParseError> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    parse_main(&mut parser)
}

/// Main = HAI Float NEWLINE Block KTHXBYE
fn parse_main(parser: &mut Parser) -> Result<Main, ParseError> {
    parser.expect(TokenKind::Hai)?;
    // the version constant is required but not validated further
    parser.expect(TokenKind::Float)?;
    parser.expect(TokenKind::Newline)?;

    let block = parse_block(parser)?;

    parser.expect(TokenKind::Kthxbye)?;
    parser.accept(TokenKind::Newline);
    parser.expect(TokenKind::EOF)?;

    Ok(Main::new(block))
}
