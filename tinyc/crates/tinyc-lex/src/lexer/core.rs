//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::classify::{is_ident_start, KeywordSet, TokenClassifier};
use crate::source::CharacterSource;
use crate::token::{Token, TokenCategory};

/// Lexer for TINY source text.
///
/// The lexer owns its [`CharacterSource`] and borrows the [`KeywordSet`]
/// through a [`TokenClassifier`]. Each call to [`Lexer::next_token`] skips
/// whitespace and comments, extracts the longest lexeme allowed by the first
/// character, and classifies it exactly once.
///
/// # Example
///
/// ```
/// use tinyc_lex::{KeywordSet, Lexer, TokenCategory};
///
/// let keywords = KeywordSet::tiny();
/// let mut lexer = Lexer::new("read x;", &keywords);
///
/// let token = lexer.next_token();
/// assert_eq!(token.lexeme(), "read");
/// assert_eq!(token.category(), TokenCategory::Keyword);
/// ```
pub struct Lexer<'k> {
    /// Character source for traversal.
    pub(super) source: CharacterSource,

    /// Classifier applied to every finished lexeme.
    classifier: TokenClassifier<'k>,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Block comments that ran into end of input.
    pub(super) unterminated_comments: usize,
}

impl<'k> Lexer<'k> {
    /// Creates a new lexer over `source`.
    pub fn new(source: impl Into<CharacterSource>, keywords: &'k KeywordSet) -> Self {
        Self {
            source: source.into(),
            classifier: TokenClassifier::new(keywords),
            token_start: 0,
            unterminated_comments: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns the end-of-input token
    /// and the cursor stays where it is.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.source.position();

        let Some(c) = self.source.peek() else {
            return Token::eof();
        };

        match c {
            c if is_ident_start(c) => self.lex_word(),
            c if c.is_ascii_digit() => self.lex_number(),
            ':' => self.lex_colon(),
            _ => self.lex_single(),
        }
    }

    /// Classifies the text consumed since `token_start`.
    pub(super) fn finish_token(&self) -> Token {
        let lexeme = self.source.slice_from(self.token_start);
        let category = self.classifier.classify(lexeme);

        if category == TokenCategory::Unknown {
            tracing::trace!(lexeme, offset = self.token_start, "unrecognized lexeme");
        }

        Token::new(lexeme, category)
    }

    /// Rewinds to the start of the source so it can be scanned again.
    pub fn reset(&mut self) {
        self.source.reset();
        self.token_start = 0;
        self.unterminated_comments = 0;
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns the byte offset where the most recent token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Number of block comments that were still open at end of input.
    pub fn unterminated_comments(&self) -> usize {
        self.unterminated_comments
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &CharacterSource {
        &self.source
    }

    /// Returns the classifier used by this lexer.
    pub fn classifier(&self) -> TokenClassifier<'k> {
        self.classifier
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans all of `source`, returning every token before end of input.
///
/// # Example
///
/// ```
/// use tinyc_lex::{tokenize, KeywordSet, TokenCategory};
///
/// let tokens = tokenize("x := 1 + 2", &KeywordSet::tiny());
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].category(), TokenCategory::AssignmentOperator);
/// ```
pub fn tokenize(source: &str, keywords: &KeywordSet) -> Vec<Token> {
    Lexer::new(source, keywords).collect()
}
