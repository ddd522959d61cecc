use std::fmt;

use tern_diagnostic::span::Span;

use crate::{Node, NodeCopy};

/// One-based row and column of a token's first character.
#[derive(NodeCopy!, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.row, self.col)
    }
}

#[derive(Node!, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexical text. For string and char literals this is the text between
    /// the quotes; for `EOF` it is empty.
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            position,
        }
    }

    pub fn eof(at: usize, position: Position) -> Self {
        Self::new(TokenKind::Eof, "", Span::empty(at), position)
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Keyword(Keyword),
    Primitive(PrimitiveType),
    Identifier,

    Integer,
    Float,
    String,
    Char,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Colon,
    DoubleColon,
    Semicolon,
    Comma,
    Assign,

    Add,
    Sub,
    Mul,
    Div,
    Mod,

    Eof,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Import,
    Fn,
    Return,
    Call,
    True,
    False,
}

/// The fixed set of built-in type names. Any identifier is a legal type name
/// as well; these are only distinguished lexically.
#[derive(NodeCopy!)]
pub enum PrimitiveType {
    Void,
    Int,
    String,
    Float,
    Char,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Import => "keyword `import`",
                Keyword::Fn => "keyword `fn`",
                Keyword::Return => "keyword `return`",
                Keyword::Call => "keyword `call`",
                Keyword::True => "keyword `true`",
                Keyword::False => "keyword `false`",
            },
            TokenKind::Primitive(ty) => match ty {
                PrimitiveType::Void => "type `void`",
                PrimitiveType::Int => "type `int`",
                PrimitiveType::String => "type `string`",
                PrimitiveType::Float => "type `float`",
                PrimitiveType::Char => "type `char`",
            },
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "character",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Assign => "`=`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Mod => "`%`",
            TokenKind::Eof => "end of file",
        }
    }

    /// Whether a declaration may start with this token.
    pub fn is_type_name(&self) -> bool {
        matches!(self, TokenKind::Primitive(_) | TokenKind::Identifier)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}
