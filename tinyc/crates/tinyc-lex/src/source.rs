//! Character source for traversing TINY programs.
//!
//! This module provides the `CharacterSource` struct, which owns the full
//! text of one source unit and a single forward-moving cursor over it.

/// An owned source buffer with a positioned character cursor.
///
/// The cursor is a byte offset that only moves forward, except through
/// [`CharacterSource::reset`] or [`CharacterSource::load`]. ASCII bytes are
/// single characters. A non-ASCII sequence is stepped over as one unit so
/// every slice handed out stays valid text.
///
/// # Example
///
/// ```
/// use tinyc_lex::CharacterSource;
///
/// let mut source = CharacterSource::new("x := 4");
///
/// assert_eq!(source.peek(), Some('x'));
/// assert_eq!(source.advance(), Some('x'));
/// assert_eq!(source.peek(), Some(' '));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharacterSource {
    /// The loaded source text.
    buffer: String,

    /// Current byte position in the buffer.
    position: usize,
}

impl CharacterSource {
    /// Creates a source over the given text with the cursor at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            position: 0,
        }
    }

    /// Creates a source from raw bytes, one character per byte.
    ///
    /// Bytes are mapped as Latin-1, so input that is not valid UTF-8 still
    /// loads: a byte outside ASCII becomes a single non-ASCII character.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::CharacterSource;
    ///
    /// let source = CharacterSource::from_bytes(b"caf\xE9");
    /// assert_eq!(source.as_str(), "caf\u{e9}");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().map(|&b| b as char).collect::<String>())
    }

    /// Replaces the buffer with `text` and rewinds the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::CharacterSource;
    ///
    /// let mut source = CharacterSource::default();
    /// assert!(source.is_at_end());
    ///
    /// source.load("read x");
    /// assert_eq!(source.peek(), Some('r'));
    /// ```
    pub fn load(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.position = 0;
    }

    /// Returns the character at the cursor without advancing.
    ///
    /// Returns `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.char_at(self.position)
    }

    /// Returns the character just past the cursor without advancing.
    #[inline]
    pub fn peek_next(&self) -> Option<char> {
        let width = self.peek()?.len_utf8();
        self.char_at(self.position + width)
    }

    /// Returns the character at the cursor and moves past it.
    ///
    /// At end of input returns `None` and leaves the cursor unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::CharacterSource;
    ///
    /// let mut source = CharacterSource::new("ab");
    /// assert_eq!(source.advance(), Some('a'));
    /// assert_eq!(source.advance(), Some('b'));
    /// assert_eq!(source.advance(), None);
    /// assert_eq!(source.position(), 2);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the character at the cursor if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor has reached the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the whole buffer.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the text between `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.buffer[start..self.position]
    }

    /// Returns the text from the cursor to the end.
    pub fn remaining(&self) -> &str {
        &self.buffer[self.position..]
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        let b = *self.buffer.as_bytes().get(pos)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.buffer[pos..].chars().next()
    }
}

impl From<String> for CharacterSource {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for CharacterSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
