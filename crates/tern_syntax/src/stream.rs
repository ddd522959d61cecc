use crate::token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenStreamError {
    #[error("token stream is empty")]
    Empty,

    #[error("token stream must end with end of file, found {0}")]
    MissingEof(TokenKind),

    #[error("end of file token at index {0} is not the last token")]
    EarlyEof(usize),
}

/// An immutable token sequence, terminated by exactly one `EOF` token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Result<Self, TokenStreamError> {
        let eof = tokens.pop().ok_or(TokenStreamError::Empty)?;

        if eof.kind != TokenKind::Eof {
            return Err(TokenStreamError::MissingEof(eof.kind));
        }

        if let Some(index) = tokens.iter().position(|t| t.kind == TokenKind::Eof) {
            return Err(TokenStreamError::EarlyEof(index));
        }

        Ok(Self { tokens, eof })
    }

    pub(crate) fn from_parts(tokens: Vec<Token>, eof: Token) -> Self {
        debug_assert_eq!(eof.kind, TokenKind::Eof);
        Self { tokens, eof }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().chain(std::iter::once(&self.eof))
    }

    /// Number of tokens, including the final `EOF`.
    pub fn len(&self) -> usize {
        self.tokens.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn eof(&self) -> &Token {
        &self.eof
    }

    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor {
            tokens: &self.tokens,
            eof: &self.eof,
            pos: 0,
        }
    }
}

/// Read position over a [`TokenStream`].
///
/// The position never moves past the final `EOF`, so every lookahead is in
/// bounds: peeking beyond the end yields `EOF`.
pub(crate) struct Cursor<'t> {
    tokens: &'t [Token],
    eof: &'t Token,
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn peek(&self) -> &'t Token {
        self.peek_nth(0)
    }

    pub fn peek_nth(&self, offset: usize) -> &'t Token {
        self.tokens.get(self.pos + offset).unwrap_or(self.eof)
    }

    /// Moves past the current token and returns it. At the end this is a
    /// no-op that returns `EOF`.
    pub fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn eof(&self) -> &'t Token {
        self.eof
    }
}
