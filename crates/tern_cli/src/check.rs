use tern_diagnostic::sources::{Cached, Source};
use tern_diagnostic::DiagnosticEmitter;
use tern_syntax::ast::Root;
use tern_syntax::IntoDiagnostic;

pub type Sources = Vec<Cached<(String, String)>>;

/// Lexes and parses one source, handing every problem to `emitter`.
///
/// Returns `None` if `source_id` is not in `sources`.
pub fn check<E>(sources: &Sources, source_id: usize, emitter: &mut E) -> Option<Root>
where
    E: DiagnosticEmitter<Sources>,
{
    let source = sources.get(source_id)?;

    let (tokens, lexer_errors) = tern_syntax::lex(source.source_str());
    for error in lexer_errors {
        emitter.emit_diagnostic(error.into_diagnostic(source_id), sources);
    }

    let (root, parse_errors) = tern_syntax::parse(&tokens);
    for error in parse_errors {
        emitter.emit_diagnostic(error.into_diagnostic(source_id), sources);
    }

    Some(root)
}

#[cfg(test)]
mod tests {
    use tern_diagnostic::sources::Cached;
    use tern_diagnostic::Diagnostic;

    use super::{check, Sources};

    fn check_str(source: &str) -> (usize, Vec<Diagnostic<Sources>>) {
        let sources = vec![Cached::new(("test".to_owned(), source.to_owned()))];
        let mut diagnostics = vec![];

        let root = check(&sources, 0, &mut diagnostics).unwrap();
        (root.items.len(), diagnostics)
    }

    #[test]
    fn clean_program() {
        let (items, diagnostics) =
            check_str("import io::print;\nfn main(): int {\n    print(\"hi\");\n    return 0;\n}\n");

        assert_eq!(items, 2);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn lexer_and_parser_errors_are_both_emitted() {
        let (items, diagnostics) = check_str("fn main(): void { int x = 1 $ ; return; }");

        assert_eq!(items, 1);

        let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
        // `$` is dropped by the lexer; `return;` has no value
        assert_eq!(codes, [Some(3), Some(1)]);
    }

    #[test]
    fn unknown_source() {
        let sources: Sources = vec![];
        let mut diagnostics: Vec<Diagnostic<Sources>> = vec![];
        assert!(check(&sources, 0, &mut diagnostics).is_none());
    }
}
