
use std::str::Chars;

use tern_diagnostic::span::Span;
use tern_utils::peek::Peek;

use crate::stream::TokenStream;
use crate::token::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
    pub position: Position,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated character literal")]
    UnterminatedChar,
}

pub struct Lexer<'src> {
    errors: Vec<LexerError>,

    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    token_position: Position,

    row: usize,
    col: usize,
    col_pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            errors: vec![],

            all: source,
            chars: source.chars(),

            token_start: 0,
            token_position: Position::new(1, 1),

            row: 1,
            col: 1,
            col_pos: 0,
        }
    }

    pub fn lex(mut self) -> (TokenStream, Vec<LexerError>) {
        let mut tokens = vec![];
        while let Some(token) = self.lex_token() {
            tokens.push(token);
        }

        self.start_token();
        let eof = Token::eof(self.token_start, self.token_position);

        (TokenStream::from_parts(tokens, eof), self.errors)
    }

    fn lex_token(&mut self) -> Option<Token> {
        loop {
            self.start_token();

            let kind = match self.bump()? {
                // comment
                '/' if self.chars.eat('/') => {
                    while !matches!(self.bump(), Some('\n') | None) {}
                    continue;
                }

                ch if ch.is_whitespace() => continue,

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,

                ':' if self.chars.eat(':') => TokenKind::DoubleColon,
                ':' => TokenKind::Colon,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '=' => TokenKind::Assign,

                '+' => TokenKind::Add,
                '-' => TokenKind::Sub,
                '*' => TokenKind::Mul,
                '/' => TokenKind::Div,
                '%' => TokenKind::Mod,

                '"' if self.lex_quoted('"') => TokenKind::String,
                '"' => {
                    self.report_error(LexerErrorKind::UnterminatedString);
                    continue;
                }

                '\'' if self.lex_quoted('\'') => TokenKind::Char,
                '\'' => {
                    self.report_error(LexerErrorKind::UnterminatedChar);
                    continue;
                }

                '0'..='9' => self.lex_number(),

                ch if is_ident_start(ch) => self.lex_alpha(),

                ch => {
                    self.report_error(LexerErrorKind::UnexpectedChar(ch));
                    continue;
                }
            };

            return Some(self.finish_token(kind));
        }
    }

    /// Consumes up to and including the closing quote. Literals may not span
    /// lines; returns `false` if the line or source ends first.
    fn lex_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.chars.peek() {
                None | Some('\n') => return false,

                Some('\\') => {
                    self.bump();
                    if !matches!(self.chars.peek(), None | Some('\n')) {
                        self.bump();
                    }
                }

                Some(ch) => {
                    self.bump();
                    if ch == quote {
                        return true;
                    }
                }
            }
        }
    }

    fn lex_number(&mut self) -> TokenKind {
        self.chars.eat_while(char::is_ascii_digit);

        let is_float = self.chars.peek() == Some('.')
            && self.chars.peek_nth(1).is_some_and(|ch| ch.is_ascii_digit());

        if is_float {
            self.bump();
            self.chars.eat_while(char::is_ascii_digit);
            TokenKind::Float
        } else {
            TokenKind::Integer
        }
    }

    fn lex_alpha(&mut self) -> TokenKind {
        self.chars.eat_while(|&ch| is_ident(ch));

        match self.lexeme() {
            "import" => TokenKind::Keyword(Keyword::Import),
            "fn" => TokenKind::Keyword(Keyword::Fn),
            "return" => TokenKind::Keyword(Keyword::Return),
            "call" => TokenKind::Keyword(Keyword::Call),
            "true" => TokenKind::Keyword(Keyword::True),
            "false" => TokenKind::Keyword(Keyword::False),

            "void" => TokenKind::Primitive(PrimitiveType::Void),
            "int" => TokenKind::Primitive(PrimitiveType::Int),
            "string" => TokenKind::Primitive(PrimitiveType::String),
            "float" => TokenKind::Primitive(PrimitiveType::Float),
            "char" => TokenKind::Primitive(PrimitiveType::Char),

            _ => TokenKind::Identifier,
        }
    }

    fn finish_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.lexeme();
        let text = match kind {
            TokenKind::String | TokenKind::Char => &lexeme[1..lexeme.len() - 1],
            _ => lexeme,
        };

        Token::new(kind, text, self.token_span(), self.token_position)
    }

    /// Advances one character, tracking line starts.
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.row += 1;
            self.col = 1;
            self.col_pos = self.byte_pos();
        }
        Some(ch)
    }

    /// Columns count characters. `col` is the column of `col_pos`, so only
    /// the text since the previous token is counted.
    fn start_token(&mut self) {
        self.token_start = self.byte_pos();

        self.col += self.all[self.col_pos..self.token_start].chars().count();
        self.col_pos = self.token_start;
        self.token_position = Position::new(self.row, self.col);
    }

    fn lexeme(&self) -> &'src str {
        &self.all[self.token_start..self.byte_pos()]
    }

    fn token_span(&self) -> Span {
        Span::new(self.token_start, self.byte_pos())
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    fn report_error(&mut self, kind: LexerErrorKind) {
        self.errors.push(LexerError {
            kind,
            span: self.token_span(),
            position: self.token_position,
        });
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
