use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{CourierResult, Diagnostic, DiagnosticKind},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type PatternHandler = fn(&mut Lexer, &str) -> CourierResult<()>;

struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    /// Character classes in dispatch order. Every regex is anchored at the
    /// cursor and only ever matches 7-bit characters.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern { regex: Regex::new(r"^[ \t\n\x0B\x0C\r]+").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r"^#.*").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        Pattern { regex: Regex::new(r"^[0-9][A-Za-z0-9_]*").unwrap(), handler: number_handler },
        Pattern { regex: Regex::new(r"^[+\-*/=]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        Pattern { regex: Regex::new(r"^[;,:]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Delimiter) },
        Pattern { regex: Regex::new(r"^[{}()]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Control) },
    ];
}

/// A reusable lexing context.
///
/// Every call to [`Lexer::tokenize_file`] or [`Lexer::tokenize_source`] starts a
/// fresh run: the previous tokens and diagnostic are discarded. After a run the
/// token table holds everything emitted before the first error, so tooling can
/// still inspect a partial result.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    diagnostic: Diagnostic,
    line_num: u32,
    line_idx: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            diagnostic: Diagnostic::success(),
            line_num: 1,
            line_idx: 0,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn into_parts(self) -> (Vec<Token>, Diagnostic) {
        (self.tokens, self.diagnostic)
    }

    /// Tokenizes the file at `path` line by line.
    ///
    /// A file that cannot be opened yields a `FileOpenError` with no position.
    pub fn tokenize_file(&mut self, path: impl AsRef<Path>) -> &Diagnostic {
        self.reset();

        let path = path.as_ref();
        debug!(path = %path.display(), "tokenizing file");

        let result = match File::open(path) {
            Ok(file) => self.tokenize_reader(BufReader::new(file)),
            Err(err) => Err(Diagnostic::new(DiagnosticKind::FileOpenError)
                .with_message(format!("{} ({})", path.display(), err))),
        };

        self.finish(result)
    }

    pub fn tokenize_source(&mut self, source: &str) -> &Diagnostic {
        self.reset();
        let result = self.tokenize_reader(source.as_bytes());
        self.finish(result)
    }

    pub(crate) fn advance_n(&mut self, n: usize) {
        self.line_idx += n;
    }

    /// Appends a token starting at the cursor.
    pub(crate) fn push(&mut self, kind: TokenKind, text: &str) -> CourierResult<()> {
        let column = self.column();

        self.tokens.try_reserve(1).map_err(|_| {
            Diagnostic::new(DiagnosticKind::AllocationFailure).at(self.line_num, column)
        })?;

        let token = MK_TOKEN!(kind, text, self.line_num, column);
        trace!(%token, "token");
        self.tokens.push(token);

        Ok(())
    }

    fn column(&self) -> u32 {
        (self.line_idx + 1) as u32
    }

    fn reset(&mut self) {
        self.tokens.clear();
        self.diagnostic.clear();
        self.line_num = 1;
        self.line_idx = 0;
    }

    fn finish(&mut self, result: CourierResult<()>) -> &Diagnostic {
        self.diagnostic = match result {
            Ok(()) => Diagnostic::success(),
            Err(diagnostic) => diagnostic,
        };

        debug!(
            tokens = self.tokens.len(),
            status = self.diagnostic.get_error_name(),
            "lexing finished"
        );

        &self.diagnostic
    }

    fn tokenize_reader<R: BufRead>(&mut self, mut reader: R) -> CourierResult<()> {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let read = reader.read_until(b'\n', &mut buffer).map_err(|err| {
                Diagnostic::new(DiagnosticKind::FileOpenError).with_message(err.to_string())
            })?;

            if read == 0 {
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buffer);
            self.tokenize_line(trim_line_ending(&line))?;
            self.line_num += 1;
        }
    }

    fn tokenize_line(&mut self, line: &str) -> CourierResult<()> {
        self.line_idx = 0;

        while self.line_idx < line.len() {
            let remainder = &line[self.line_idx..];

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            match matched {
                Some((handler, text)) => handler(self, text)?,
                None => {
                    let offending = remainder.chars().next().map(String::from).unwrap_or_default();
                    return Err(Diagnostic::new(DiagnosticKind::UnrecognizedSymbol)
                        .with_message(offending)
                        .at(self.line_num, self.column()));
                }
            }
        }

        Ok(())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> CourierResult<()> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> CourierResult<()> {
    lexer.push(TokenKind::Symbol, matched)?;
    lexer.advance_n(matched.len());
    Ok(())
}

/// Numbers are scanned over the whole alphanumeric run so that a malformed
/// literal such as `4a` is reported in full. The malformed literal is still
/// emitted as a Number token before the run halts.
fn number_handler(lexer: &mut Lexer, matched: &str) -> CourierResult<()> {
    let (line, column) = (lexer.line_num, lexer.column());

    lexer.push(TokenKind::Number, matched)?;
    lexer.advance_n(matched.len());

    if !matched.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Diagnostic::new(DiagnosticKind::InvalidNumericLiteral)
            .with_message(matched)
            .at(line, column));
    }

    Ok(())
}

/// Tokenizes the file at `path`, returning every token emitted and the
/// terminal diagnostic of the run.
pub fn tokenize_file(path: impl AsRef<Path>) -> (Vec<Token>, Diagnostic) {
    let mut lexer = Lexer::new();
    lexer.tokenize_file(path);
    lexer.into_parts()
}

pub fn tokenize_source(source: &str) -> (Vec<Token>, Diagnostic) {
    let mut lexer = Lexer::new();
    lexer.tokenize_source(source);
    lexer.into_parts()
}
