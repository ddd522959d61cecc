mod emitter;
mod render;
pub mod sources;
pub mod span;

use std::fmt;

pub use emitter::{DiagnosticEmitter, PrettyDiagnosticEmitter};
pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::sources::Sources;
use self::span::{AsSpan, Span};

/// An error report: message, numeric code, and labelled source snippets.
pub struct Diagnostic<S: Sources> {
    pub message: Option<String>,
    pub code: Option<u32>,

    pub snippets: Vec<Snippet<S>>,
}

impl<S: Sources> Diagnostic<S> {
    pub fn error() -> Self {
        Self {
            message: None,
            code: None,
            snippets: vec![],
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet<S>) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl<S: Sources> fmt::Debug for Diagnostic<S>
where
    S::SourceId: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostic")
            .field("message", &self.message)
            .field("code", &self.code)
            .field("snippets", &self.snippets)
            .finish()
    }
}

pub struct Snippet<S: Sources> {
    pub label: String,

    pub source_id: S::SourceId,
    pub span: Span,
}

impl<S: Sources> Snippet<S> {
    pub fn new(label: impl Into<String>, source_id: S::SourceId, span: impl AsSpan) -> Self {
        Self {
            label: label.into(),
            source_id,
            span: span.as_span(),
        }
    }
}

impl<S: Sources> fmt::Debug for Snippet<S>
where
    S::SourceId: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Snippet")
            .field("label", &self.label)
            .field("source_id", &self.source_id)
            .field("span", &self.span)
            .finish()
    }
}

/// Rendering options for [`Diagnostic::write_to_stream`].
#[derive(Debug)]
pub struct Config {
    /// Lines of source shown above each labelled line.
    pub context_size: usize,

    pub error_color: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,
    pub underline: &'static str,
    pub underline_after: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red));
        error_color.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_dimmed(true);

        Self {
            context_size: 1,

            error_color,
            subtle,

            gutter: "│",
            underline: "^",
            underline_after: " ",
        }
    }
}
