mod check;
mod cli;

use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use tern_diagnostic::sources::Cached;
use tern_diagnostic::PrettyDiagnosticEmitter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("found {0} error(s)")]
    HadErrors(usize),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            input,
            source,
            color,
        } => {
            let (name, source) = if source {
                ("<unnamed>".to_owned(), input)
            } else {
                let source = std::fs::read_to_string(&input)?;
                (input, source)
            };

            let sources = vec![Cached::new((name.clone(), source))];
            let mut emitter = PrettyDiagnosticEmitter::new(color.into());

            if let Some(root) = check::check(&sources, 0, &mut emitter) {
                println!(
                    "checked {name}: {} import(s), {} function(s)",
                    root.imports().count(),
                    root.functions().count(),
                );
            }

            match emitter.errors() {
                0 => Ok(()),
                n => Err(CliError::HadErrors(n)),
            }
        }
    }
}
