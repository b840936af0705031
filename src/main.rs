use std::{
    io::{stderr, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use courier::lexer::lexer::Lexer;
use tracing::debug;

/// Lexical front-end of the Courier language.
///
/// Tokenizes a source file and reports the first lexical error, if any.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CourierArgs {
    /// Source file to tokenize
    source_file: PathBuf,

    /// Print every token on success
    #[arg(long)]
    tokens: bool,
}

/// Installs a log subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=courier=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Colors the leading `Error` label of a diagnostic report red.
///
/// `colored` already honors `NO_COLOR`; output that is not a terminal stays plain.
fn colorize_report(report: &str) -> String {
    if !stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match report.strip_prefix("Error") {
        Some(rest) => format!("{}{}", "Error".red(), rest),
        None => report.to_string(),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let CourierArgs {
        source_file,
        tokens,
    } = CourierArgs::parse();

    let mut lexer = Lexer::new();
    let diagnostic = lexer.tokenize_file(&source_file);

    if !diagnostic.is_success() {
        eprintln!("{}", colorize_report(&diagnostic.report()));
        return ExitCode::FAILURE;
    }

    debug!(tokens = lexer.tokens().len(), "tokenized {}", source_file.display());

    if tokens {
        for token in lexer.tokens() {
            println!("{token}");
        }
    }

    ExitCode::SUCCESS
}
