use tern_diagnostic::sources::Sources;
use tern_diagnostic::{Diagnostic, Snippet};

use crate::lexer::LexerError;
use crate::parser::{ParseError, ParseErrorKind};

/// Numeric error codes attached to every reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidToken = 1,
    InvalidSyntax = 2,
    InvalidCharacter = 3,
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        self as u32
    }
}

pub trait IntoDiagnostic {
    fn into_diagnostic<S: Sources>(self, source_id: S::SourceId) -> Diagnostic<S>;
}

impl IntoDiagnostic for ParseError {
    fn into_diagnostic<S: Sources>(self, source_id: S::SourceId) -> Diagnostic<S> {
        let label = match &self.kind {
            ParseErrorKind::TokenMismatch { expected, .. } => format!("expected {expected} here"),
            ParseErrorKind::UnexpectedStatementStart { found, .. } => {
                format!("{found} cannot start a statement")
            }
            ParseErrorKind::MissingLeftOperand { .. } => "no left operand".to_owned(),
            ParseErrorKind::ExpectedExpression { .. } => "expected an expression here".to_owned(),
            ParseErrorKind::InvalidLiteral { .. } => "this literal".to_owned(),
        };

        Diagnostic::error()
            .with_code(self.code().code())
            .with_message(self.kind.to_string())
            .with_snippet(Snippet::new(label, source_id, self.span))
    }
}

impl IntoDiagnostic for LexerError {
    fn into_diagnostic<S: Sources>(self, source_id: S::SourceId) -> Diagnostic<S> {
        Diagnostic::error()
            .with_code(ErrorCode::InvalidCharacter.code())
            .with_message(self.kind.to_string())
            .with_snippet(Snippet::new("this token", source_id, self.span))
    }
}
