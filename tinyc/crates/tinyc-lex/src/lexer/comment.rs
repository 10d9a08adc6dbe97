//! Whitespace and comment skipping.
//!
//! TINY has two comment forms: `//` runs to the end of the line and `{`
//! runs to the first `}`. Block comments do not nest.

use crate::classify::is_whitespace;
use crate::Lexer;

impl Lexer<'_> {
    /// Skips whitespace and comments.
    ///
    /// Loops until the next character is neither whitespace nor a comment
    /// opener, or the input is exhausted. Called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.source.peek() {
                Some(c) if is_whitespace(c) => {
                    self.source.advance();
                }
                Some('/') if self.source.peek_next() == Some('/') => self.skip_line_comment(),
                Some('{') => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        self.source.advance();
        self.source.advance();

        while self.source.peek().is_some_and(|c| c != '\n') {
            self.source.advance();
        }
    }

    /// Skips a block comment through its closing brace.
    ///
    /// An unterminated comment swallows the rest of the input.
    fn skip_block_comment(&mut self) {
        let start = self.source.position();
        self.source.advance();

        loop {
            match self.source.advance() {
                Some('}') => return,
                Some(_) => {}
                None => {
                    self.unterminated_comments += 1;
                    tracing::warn!(offset = start, "unterminated block comment");
                    return;
                }
            }
        }
    }
}
