
mod expr;

use std::fmt;

use tern_diagnostic::span::Span;

use crate::ast::*;
use crate::diagnostics::ErrorCode;
use crate::stream::{Cursor, TokenStream};
use crate::token::{Keyword, Position, Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub position: Position,
}

impl ParseError {
    fn new(kind: ParseErrorKind, at: &Token) -> Self {
        Self {
            kind,
            span: at.span,
            position: at.position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::TokenMismatch { .. }
            | ParseErrorKind::UnexpectedStatementStart { .. }
            | ParseErrorKind::ExpectedExpression { .. } => ErrorCode::InvalidToken,

            ParseErrorKind::MissingLeftOperand { .. } | ParseErrorKind::InvalidLiteral { .. } => {
                ErrorCode::InvalidSyntax
            }
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    TokenMismatch {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("expected {context}, found {found}")]
    UnexpectedStatementStart {
        context: StmtContext,
        found: TokenKind,
    },

    #[error("operator `{op}` must have an expression on its left side")]
    MissingLeftOperand { op: BinOp },

    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: TokenKind },

    #[error("invalid {kind} literal `{text}`")]
    InvalidLiteral { kind: LiteralKind, text: String },
}

/// Where a statement was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtContext {
    TopLevel,
    Body,
}

impl fmt::Display for StmtContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtContext::TopLevel => f.write_str("an import or function"),
            StmtContext::Body => f.write_str("a statement"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Int => f.write_str("integer"),
            LiteralKind::Float => f.write_str("float"),
            LiteralKind::Char => f.write_str("character"),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A single parse over one token stream.
///
/// Parsing consumes the parser, so cursor state never outlives the parse
/// it belongs to.
pub struct Parser<'t> {
    tokens: Cursor<'t>,
    errors: Vec<ParseError>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t TokenStream) -> Self {
        Self {
            tokens: tokens.cursor(),
            errors: vec![],
        }
    }

    pub fn parse(mut self) -> (Root, Vec<ParseError>) {
        let root = self.parse_root();
        (root, self.errors)
    }

    fn parse_root(&mut self) -> Root {
        let mut items = vec![];

        while !self.at(TokenKind::Eof) {
            items.push(self.parse_item());
        }

        Root { items }
    }

    fn parse_item(&mut self) -> Item {
        match self.tokens.peek().kind {
            TokenKind::Keyword(Keyword::Import) => Item::Import(self.parse_import()),
            TokenKind::Keyword(Keyword::Fn) => Item::Function(self.parse_function()),

            _ => {
                self.skip_unexpected(StmtContext::TopLevel);
                Item::Error
            }
        }
    }

    fn parse_import(&mut self) -> Import {
        self.consume(TokenKind::Keyword(Keyword::Import));
        let namespace = self.consume_text(TokenKind::Identifier);
        self.consume(TokenKind::DoubleColon);
        let name = self.consume_text(TokenKind::Identifier);
        self.consume(TokenKind::Semicolon);

        Import { namespace, name }
    }

    fn parse_function(&mut self) -> Function {
        self.consume(TokenKind::Keyword(Keyword::Fn));
        let name = self.consume_text(TokenKind::Identifier);

        self.consume(TokenKind::LParen);
        let args = self.parse_args();
        self.consume(TokenKind::RParen);

        self.consume(TokenKind::Colon);
        let return_type = self.parse_type();
        let body = self.parse_body();

        Function {
            name,
            return_type,
            args,
            body,
        }
    }

    fn parse_args(&mut self) -> Vec<Arg> {
        let mut args = vec![];

        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            let ty = self.parse_type();
            let name = self.consume_text(TokenKind::Identifier);
            args.push(Arg { name, ty });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        args
    }

    fn parse_type(&mut self) -> String {
        let token = self.tokens.peek();

        if token.kind.is_type_name() {
            self.tokens.advance();
            token.text.clone()
        } else {
            self.report(ParseError::new(
                ParseErrorKind::TokenMismatch {
                    expected: "a type",
                    found: token.kind,
                },
                token,
            ));
            self.tokens.eof().text.clone()
        }
    }

    fn parse_body(&mut self) -> Body {
        self.consume(TokenKind::LBrace);

        let mut stmts = vec![];
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            stmts.push(self.parse_stmt());
        }

        self.consume(TokenKind::RBrace);

        Body { stmts }
    }

    fn parse_stmt(&mut self) -> Stmt {
        let token = self.tokens.peek();

        match token.kind {
            TokenKind::Keyword(Keyword::Return) => self.parse_return(),
            TokenKind::Keyword(Keyword::Call) => self.parse_call(),

            kind if kind.is_type_name() => {
                if self.tokens.peek_nth(1).kind == TokenKind::LParen {
                    Stmt::FunctionCall(self.parse_function_call())
                } else {
                    self.parse_variable_declaration()
                }
            }

            _ => {
                self.skip_unexpected(StmtContext::Body);
                Stmt::Error
            }
        }
    }

    fn parse_variable_declaration(&mut self) -> Stmt {
        let ty = self.parse_type();
        let name = self.consume_text(TokenKind::Identifier);

        let initializer = self
            .eat(TokenKind::Assign)
            .then(|| self.parse_expr_or_recover());

        self.consume(TokenKind::Semicolon);

        Stmt::VariableDeclaration {
            name,
            ty,
            initializer,
        }
    }

    fn parse_function_call(&mut self) -> FunctionCall {
        // the callee was already checked to be a type name, so it is consumed
        // even when it is a type keyword rather than an identifier
        let name = match self.expect(TokenKind::Identifier) {
            Ok(token) => token.text.clone(),
            Err(error) => {
                self.report(error);
                self.tokens.advance().text.clone()
            }
        };

        self.consume(TokenKind::LParen);

        let mut args = vec![];
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            args.push(self.parse_expr_or_recover());

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.consume(TokenKind::RParen);
        self.consume(TokenKind::Semicolon);

        FunctionCall { name, args }
    }

    fn parse_call(&mut self) -> Stmt {
        self.consume(TokenKind::Keyword(Keyword::Call));
        self.consume(TokenKind::LBrace);
        let content = self.consume_text(TokenKind::String);
        self.consume(TokenKind::RBrace);
        self.consume(TokenKind::Semicolon);

        Stmt::Call { content }
    }

    fn parse_return(&mut self) -> Stmt {
        self.consume(TokenKind::Keyword(Keyword::Return));
        let expr = self.parse_expr_or_recover();
        self.consume(TokenKind::Semicolon);

        Stmt::Return(expr)
    }

    /// Reports the current token as unable to start a statement and skips it.
    fn skip_unexpected(&mut self, context: StmtContext) {
        let token = self.tokens.advance();
        self.report(ParseError::new(
            ParseErrorKind::UnexpectedStatementStart {
                context,
                found: token.kind,
            },
            token,
        ));
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<&'t Token> {
        let token = self.tokens.peek();

        if token.kind == kind {
            Ok(self.tokens.advance())
        } else {
            Err(ParseError::new(
                ParseErrorKind::TokenMismatch {
                    expected: kind.token_name(),
                    found: token.kind,
                },
                token,
            ))
        }
    }

    /// Like [`Parser::expect`], but a mismatch is reported and answered with
    /// the `EOF` token, leaving the cursor where it is.
    fn consume(&mut self, kind: TokenKind) -> &'t Token {
        match self.expect(kind) {
            Ok(token) => token,
            Err(error) => {
                self.report(error);
                self.tokens.eof()
            }
        }
    }

    fn consume_text(&mut self, kind: TokenKind) -> String {
        self.consume(kind).text.clone()
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        let matches = self.at(kind);
        if matches {
            self.tokens.advance();
        }
        matches
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.tokens.peek().kind == kind
    }

    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}
