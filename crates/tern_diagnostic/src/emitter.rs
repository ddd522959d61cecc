use termcolor::{ColorChoice, StandardStream};

use crate::sources::Sources;
use crate::{Config, Diagnostic};

/// Receiver of diagnostics. Emitting never aborts the caller.
pub trait DiagnosticEmitter<S: Sources> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic<S>, sources: &S);
}

impl<S: Sources> DiagnosticEmitter<S> for Vec<Diagnostic<S>> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic<S>, _sources: &S) {
        self.push(diagnostic);
    }
}

pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
    pub config: Config,

    errors: usize,
}

impl PrettyDiagnosticEmitter {
    pub fn new(color: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(color),
            config: Config::default(),
            errors: 0,
        }
    }

    /// Number of diagnostics emitted so far.
    pub fn errors(&self) -> usize {
        self.errors
    }
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl<S: Sources> DiagnosticEmitter<S> for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic<S>, sources: &S) {
        self.errors += 1;
        let _ = diagnostic.write_to_stream(sources, &self.config, &mut self.stream);
    }
}

#[cfg(test)]
mod tests {
    use termcolor::ColorChoice;

    use super::{DiagnosticEmitter, PrettyDiagnosticEmitter};
    use crate::sources::Cached;
    use crate::{Diagnostic, Snippet};

    type Sources = Vec<Cached<(String, String)>>;

    #[test]
    fn pretty_emitter_counts_errors() {
        let sources: Sources = vec![Cached::new(("main.tn".to_owned(), "fn".to_owned()))];
        let mut emitter = PrettyDiagnosticEmitter::new(ColorChoice::Never);

        emitter.emit_diagnostic(Diagnostic::error().with_message("first"), &sources);
        emitter.emit_diagnostic(
            Diagnostic::error().with_snippet(Snippet::new("here", 0, 0..2)),
            &sources,
        );

        assert_eq!(emitter.errors(), 2);
    }

    #[test]
    fn vec_emitter_keeps_order() {
        let sources: Sources = vec![];
        let mut emitted: Vec<Diagnostic<Sources>> = vec![];

        emitted.emit_diagnostic(Diagnostic::error().with_code(1), &sources);
        emitted.emit_diagnostic(Diagnostic::error().with_code(2), &sources);

        let codes: Vec<_> = emitted.iter().map(|d| d.code).collect();
        assert_eq!(codes, [Some(1), Some(2)]);
    }
}
