use std::io;

use termcolor::WriteColor;
use unicode_width::UnicodeWidthStr;

use super::sources::{Cached, Source, Sources};
use super::{Config, Diagnostic, Snippet};

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<W: WriteColor, S: Sources> DiagnosticWriter<'_, '_, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let (diagnostic, sources) = (self.diagnostic, self.sources);

        for snippet in &diagnostic.snippets {
            // snippets pointing at unknown sources are skipped
            if let Some(source) = sources.get_source(snippet.source_id) {
                self.draw_snippet(source, snippet)?;
            }
        }

        writeln!(self.stream)
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(&self.config.error_color)?;

        if let Some(code) = self.diagnostic.code {
            write!(self.stream, "[E{code:04}] ")?;
        }

        write!(self.stream, "error:")?;
        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_snippet(&mut self, source: &Cached<S::Source>, snippet: &Snippet<S>) -> io::Result<()> {
        let source_len = source.source_str().len();
        let start = snippet.span.start.min(source_len);

        let Some((row, col)) = source.byte_to_row_col(start) else {
            return Ok(());
        };
        let line = row - 1;
        let Some(line_start) = source.line_to_byte(line) else {
            return Ok(());
        };
        let line_str = source.line_str(line).unwrap_or_default();

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{row}:{col}", source.name_str())?;
        self.stream.reset()?;

        let first = line.saturating_sub(self.config.context_size);
        let line_num_width = 1 + (line + 1).ilog10() as usize;

        for context in first..line {
            let context_str = source.line_str(context).unwrap_or_default();
            self.draw_gutter(Some(context + 1), line_num_width)?;
            writeln!(self.stream, "{}", context_str.replace('\t', TAB))?;
        }

        self.draw_gutter(Some(row), line_num_width)?;
        writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

        // a span running past the end of its line is underlined up to the
        // line end only
        let start_in_line = (start - line_start).min(line_str.len());
        let end_in_line = snippet
            .span
            .end
            .saturating_sub(line_start)
            .clamp(start_in_line, line_str.len());

        let offset = str_width(&line_str[..start_in_line]);
        let width = str_width(&line_str[start_in_line..end_in_line]).max(1);

        self.draw_gutter(None, line_num_width)?;
        self.stream.set_color(&self.config.error_color)?;
        write!(self.stream, "{:<offset$}", "")?;
        write!(self.stream, "{}", self.config.underline.repeat(width))?;
        writeln!(self.stream, "{}{}", self.config.underline_after, snippet.label)?;
        self.stream.reset()
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;
        self.stream.reset()
    }
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use crate::sources::{Cached, Sources};
    use crate::{Config, Diagnostic, Snippet};

    fn render<S: Sources>(diagnostic: &Diagnostic<S>, sources: &S) -> String {
        let mut stream = NoColor::new(vec![]);

        diagnostic
            .write_to_stream(sources, &Config::default(), &mut stream)
            .unwrap();

        String::from_utf8(stream.into_inner()).unwrap()
    }

    fn sources(source: &str) -> Vec<Cached<(String, String)>> {
        vec![Cached::new(("main.tn".to_owned(), source.to_owned()))]
    }

    #[test]
    fn header_only() {
        let diagnostic = Diagnostic::<Vec<Cached<(String, String)>>>::error()
            .with_code(2)
            .with_message("something broke");

        assert_eq!(
            render(&diagnostic, &sources("")),
            "[E0002] error: something broke\n\n"
        );
    }

    #[test]
    fn underlines_snippet_with_context() {
        let sources = sources("fn main(): void {\n    return 1\n}");
        let diagnostic = Diagnostic::error()
            .with_code(1)
            .with_message("expected `;`, found `}`")
            .with_snippet(Snippet::new("expected `;` here", 0, 31..32));

        let expected = "\
[E0001] error: expected `;`, found `}`
In main.tn:3:1
2 │     return 1
3 │ }
  │ ^ expected `;` here

";
        assert_eq!(render(&diagnostic, &sources), expected);
    }

    #[test]
    fn span_clipped_to_line() {
        let sources = sources("ab\ncd");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("here", 0, 1..5));

        let expected = "\
error:
In main.tn:1:2
1 │ ab
  │  ^ here

";
        assert_eq!(render(&diagnostic, &sources), expected);
    }

    #[test]
    fn column_counts_chars() {
        let sources = sources("string s = \"ééé\" 5;");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("here", 0, 20..21));

        let expected = "\
error:
In main.tn:1:18
1 │ string s = \"ééé\" 5;
  │                  ^ here

";
        assert_eq!(render(&diagnostic, &sources), expected);
    }

    #[test]
    fn missing_source_is_skipped() {
        let diagnostic = Diagnostic::error().with_snippet(Snippet::new("here", 7, 0..1));
        assert_eq!(render(&diagnostic, &sources("x")), "error:\n\n");
    }
}
