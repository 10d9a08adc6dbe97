//! Token listing output.
//!
//! A [`TokenSink`] writes one record per token, `<lexeme>, <category>`, in
//! the order tokens are handed to it. The end-of-input token is never
//! written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tinyc_lex::Token;

use crate::error::{DriverError, Result};

/// Writes token records to an underlying writer.
///
/// The sink is open from creation until [`TokenSink::close`] or
/// [`TokenSink::finish`]. Writing to a closed sink is an error.
pub struct TokenSink<W: Write> {
    writer: Option<W>,
    path: PathBuf,
    written: usize,
}

impl TokenSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| DriverError::io(path, e))?;
        Ok(Self::from_writer(BufWriter::new(file), path))
    }
}

impl<W: Write> TokenSink<W> {
    /// Wraps an arbitrary writer. `path` only names the output in errors.
    pub fn from_writer(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer: Some(writer),
            path: path.into(),
            written: 0,
        }
    }

    /// Writes a single token record.
    ///
    /// The end-of-input token is skipped.
    pub fn write_token(&mut self, token: &Token) -> Result<()> {
        if token.is_eof() {
            return Ok(());
        }

        let writer = self.writer.as_mut().ok_or_else(|| DriverError::SinkClosed {
            path: self.path.clone(),
        })?;
        writeln!(writer, "{}, {}", token.lexeme(), token.category().name())
            .map_err(|e| DriverError::io(&self.path, e))?;

        self.written += 1;
        Ok(())
    }

    /// Writes every token in order.
    pub fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        tokens.iter().try_for_each(|token| self.write_token(token))
    }

    /// Returns true until the sink is closed.
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// The output this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and closes the sink. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| DriverError::io(&self.path, e))?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        let mut writer = self.writer.take().ok_or_else(|| DriverError::SinkClosed {
            path: self.path.clone(),
        })?;
        writer.flush().map_err(|e| DriverError::io(&self.path, e))?;
        Ok(writer)
    }
}
