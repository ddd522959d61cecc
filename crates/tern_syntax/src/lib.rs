#[macro_use]
extern crate macro_rules_attribute;

mod diagnostics;
mod lexer;
mod parser;
mod stream;

pub mod ast;
pub mod token;

pub use diagnostics::{ErrorCode, IntoDiagnostic};
pub use lexer::{LexerError, LexerErrorKind};
pub use parser::{LiteralKind, ParseError, ParseErrorKind, ParseResult, Parser, StmtContext};
pub use stream::{TokenStream, TokenStreamError};

use ast::Root;
use lexer::Lexer;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

pub fn lex(source: &str) -> (TokenStream, Vec<LexerError>) {
    Lexer::new(source).lex()
}

/// Parses a whole token stream. Errors are collected, never fatal: the
/// returned tree is only trustworthy when the error list is empty.
pub fn parse(tokens: &TokenStream) -> (Root, Vec<ParseError>) {
    Parser::new(tokens).parse()
}
