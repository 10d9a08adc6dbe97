//! tinyc-drv - Scanner Driver
//!
//! Coordinates one scanning run: read the TINY source, scan and classify every
//! token, then write the token listing.

pub mod config;
pub mod error;
pub mod output;

use std::io::Write;
use std::path::{Path, PathBuf};

use tinyc_lex::{CharacterSource, KeywordSet, Lexer, Token, TokenCategory};
use tracing::{debug, info};

pub use config::Config;
pub use error::{DriverError, Result};
pub use output::TokenSink;

/// Reads a whole source file into a [`CharacterSource`].
///
/// The file is read as raw bytes, one character per byte, so bytes that are
/// not valid UTF-8 load as Unknown characters instead of failing the run.
/// Only a file that cannot be opened or read is an error.
pub fn load_source(path: &Path) -> Result<CharacterSource> {
    let bytes = std::fs::read(path).map_err(|e| DriverError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
    Ok(CharacterSource::from_bytes(&bytes))
}

/// Tokens of one source unit, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    unterminated_comments: usize,
}

impl TokenSequence {
    /// Appends a token. The end-of-input token is not stored.
    pub fn push(&mut self, token: Token) {
        if !token.is_eof() {
            self.tokens.push(token);
        }
    }

    /// The stored tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of stored tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens were stored.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens classified as Unknown.
    pub fn unknown_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.category() == TokenCategory::Unknown)
            .count()
    }

    /// Block comments still open at end of input.
    pub fn unterminated_comments(&self) -> usize {
        self.unterminated_comments
    }

    /// Consumes the sequence, returning the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Outcome of a completed scanning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Tokens written, end of input excluded.
    pub token_count: usize,
    /// Tokens classified as Unknown.
    pub unknown_count: usize,
    /// Block comments still open at end of input.
    pub unterminated_comments: usize,
    /// Where the listing was written.
    pub output: PathBuf,
}

/// One scanning session.
pub struct Session {
    /// Settings for this run.
    pub config: Config,
    keywords: KeywordSet,
}

impl Session {
    /// Creates a session over `config` with the TINY reserved words.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            keywords: KeywordSet::tiny(),
        }
    }

    /// The reserved words used for classification.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Scans `source` to completion, returning the tokens in source order.
    ///
    /// When `echo_tokens` is set, a `Found token` line is written to
    /// `progress` for each token.
    pub fn scan<O: Write>(&self, source: CharacterSource, progress: &mut O) -> Result<TokenSequence> {
        let mut lexer = Lexer::new(source, &self.keywords);
        let mut tokens = TokenSequence::default();

        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }

            if self.config.echo_tokens {
                writeln!(progress, "Found token: {} ({})", token.lexeme(), token.category())
                    .map_err(DriverError::Console)?;
            }
            tokens.push(token);
        }

        tokens.unterminated_comments = lexer.unterminated_comments();
        Ok(tokens)
    }

    /// Runs the whole pipeline: load, scan, write.
    ///
    /// Nothing is written to the output if the source cannot be read.
    pub fn run<O: Write>(&self, progress: &mut O) -> Result<ScanReport> {
        let input = &self.config.input;
        let output = &self.config.output;

        writeln!(progress, "Reading input file: {}...", input.display())
            .map_err(DriverError::Console)?;
        let source = load_source(input)?;

        writeln!(progress, "Scanning tokens...").map_err(DriverError::Console)?;
        debug!("phase: scanning");
        let tokens = self.scan(source, progress)?;

        writeln!(progress, "\nWriting tokens to output file...").map_err(DriverError::Console)?;
        debug!(path = %output.display(), "phase: writing");
        let mut sink = TokenSink::create(output)?;
        sink.write_tokens(tokens.as_slice())?;
        sink.close()?;

        let report = ScanReport {
            token_count: tokens.len(),
            unknown_count: tokens.unknown_count(),
            unterminated_comments: tokens.unterminated_comments(),
            output: output.clone(),
        };
        write_summary(progress, &report).map_err(DriverError::Console)?;

        info!(
            tokens = report.token_count,
            unknown = report.unknown_count,
            "scan finished"
        );
        Ok(report)
    }
}

const RULE: &str = "==================================";

fn write_summary<O: Write>(progress: &mut O, report: &ScanReport) -> std::io::Result<()> {
    writeln!(progress)?;
    writeln!(progress, "{RULE}")?;
    writeln!(progress, "Scanning complete!")?;
    writeln!(progress, "Total tokens scanned: {}", report.token_count)?;
    writeln!(progress, "Output written to: {}", report.output.display())?;
    writeln!(progress, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir, source: &str) -> Session {
        let input = dir.path().join("test.tny");
        std::fs::write(&input, source).unwrap();
        Session::new(Config {
            input,
            output: dir.path().join("tokens.txt"),
            ..Config::default()
        })
    }

    #[test]
    fn test_run_writes_listing() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir, "if x then\n  y := 4;\nend");
        let mut progress = Vec::new();

        let report = session.run(&mut progress).unwrap();
        assert_eq!(report.token_count, 8);
        assert_eq!(report.unknown_count, 0);

        let listing = std::fs::read_to_string(dir.path().join("tokens.txt")).unwrap();
        assert_eq!(
            listing,
            "if, Keyword\nx, Identifier\nthen, Keyword\ny, Identifier\n:=, AssignmentOp\n\
             4, Number\n;, Semicolon\nend, Keyword\n"
        );
    }

    #[test]
    fn test_run_progress_output() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir, "x := 1 + 2");
        let mut progress = Vec::new();
        session.run(&mut progress).unwrap();

        let text = String::from_utf8(progress).unwrap();
        assert!(text.contains("Scanning tokens..."));
        assert!(text.contains("Found token: := (AssignmentOp)"));
        assert!(text.contains("Found token: + (ArithmeticOp)"));
        assert!(text.contains("Total tokens scanned: 5"));
    }

    #[test]
    fn test_run_without_echo() {
        let dir = TempDir::new().unwrap();
        let mut session = session_in(&dir, "read x");
        session.config.echo_tokens = false;
        let mut progress = Vec::new();
        session.run(&mut progress).unwrap();

        let text = String::from_utf8(progress).unwrap();
        assert!(!text.contains("Found token"));
        assert!(text.contains("Total tokens scanned: 2"));
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(Config {
            input: dir.path().join("absent.tny"),
            output: dir.path().join("tokens.txt"),
            ..Config::default()
        });

        let err = session.run(&mut std::io::sink()).unwrap_err();
        assert!(matches!(err, DriverError::Io { .. }));
        assert!(!dir.path().join("tokens.txt").exists());
    }

    #[test]
    fn test_report_counts_unknown_and_open_comments() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir, "x : y # { open");
        let report = session.run(&mut std::io::sink()).unwrap();

        assert_eq!(report.token_count, 4);
        assert_eq!(report.unknown_count, 2);
        assert_eq!(report.unterminated_comments, 1);
    }

    /// Accepts a fixed number of writes, then fails every write after that.
    struct FailingWriter {
        writes_left: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.writes_left == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            }
            self.writes_left -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_progress_failure_is_console_error() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir, "x := 1");

        let err = session.run(&mut FailingWriter { writes_left: 0 }).unwrap_err();
        assert!(matches!(err, DriverError::Console(_)));
        assert!(!dir.path().join("tokens.txt").exists());
    }

    #[test]
    fn test_non_utf8_byte_in_comment_is_skipped() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("test.tny");
        std::fs::write(&input, b"x := 1; { caf\xE9 }\n").unwrap();
        let session = Session::new(Config {
            input,
            output: dir.path().join("tokens.txt"),
            echo_tokens: false,
            ..Config::default()
        });

        let report = session.run(&mut std::io::sink()).unwrap();
        assert_eq!(report.token_count, 4);
        assert_eq!(report.unknown_count, 0);
        let listing = std::fs::read_to_string(dir.path().join("tokens.txt")).unwrap();
        assert_eq!(listing, "x, Identifier\n:=, AssignmentOp\n1, Number\n;, Semicolon\n");
    }

    #[test]
    fn test_token_sequence_skips_eof() {
        let mut tokens = TokenSequence::default();
        tokens.push(Token::new("x", TokenCategory::Identifier));
        tokens.push(Token::eof());
        assert_eq!(tokens.len(), 1);
        assert!(!tokens.is_empty());
        assert_eq!(tokens.into_tokens()[0].lexeme(), "x");
    }

    #[test]
    fn test_scan_preserves_order() {
        let session = Session::new(Config {
            echo_tokens: false,
            ..Config::default()
        });
        let tokens = session
            .scan(CharacterSource::new("repeat x until y"), &mut std::io::sink())
            .unwrap();
        let lexemes: Vec<_> = tokens.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["repeat", "x", "until", "y"]);
    }
}
