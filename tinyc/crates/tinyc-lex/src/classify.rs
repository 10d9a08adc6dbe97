//! Lexeme classification.
//!
//! The classifier decides the [`TokenCategory`] of a finished lexeme. It is a
//! pure function of the lexeme and the [`KeywordSet`] it borrows, so the same
//! set can back any number of independent lexers.

use rustc_hash::FxHashSet;

use crate::token::TokenCategory;

/// Reserved words of the TINY language.
pub const TINY_KEYWORDS: [&str; 8] = [
    "if", "then", "else", "end", "repeat", "until", "read", "write",
];

/// Returns true if `c` can start an identifier or keyword.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` can continue an identifier or keyword.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns true for the whitespace characters skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A fixed set of reserved words.
///
/// Membership is an exact, case-sensitive match.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    words: FxHashSet<Box<str>>,
}

impl KeywordSet {
    /// Creates a keyword set from arbitrary words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().into()).collect(),
        }
    }

    /// The reserved words of TINY.
    pub fn tiny() -> Self {
        Self::new(TINY_KEYWORDS)
    }

    /// Returns true if `word` is reserved.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::tiny()
    }
}

/// Maps lexemes to token categories.
///
/// # Example
///
/// ```
/// use tinyc_lex::{KeywordSet, TokenCategory, TokenClassifier};
///
/// let keywords = KeywordSet::tiny();
/// let classifier = TokenClassifier::new(&keywords);
///
/// assert_eq!(classifier.classify("if"), TokenCategory::Keyword);
/// assert_eq!(classifier.classify("x"), TokenCategory::Identifier);
/// assert_eq!(classifier.classify("123"), TokenCategory::Number);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenClassifier<'k> {
    keywords: &'k KeywordSet,
}

impl<'k> TokenClassifier<'k> {
    /// Creates a classifier backed by `keywords`.
    pub fn new(keywords: &'k KeywordSet) -> Self {
        Self { keywords }
    }

    /// Returns the keyword set this classifier consults.
    pub fn keywords(&self) -> &'k KeywordSet {
        self.keywords
    }

    /// Determines the category of a lexeme.
    ///
    /// Symbols are looked up by their exact text; everything else is tested
    /// for number, keyword and identifier shape in that order.
    pub fn classify(&self, lexeme: &str) -> TokenCategory {
        if lexeme.is_empty() {
            return TokenCategory::Unknown;
        }

        if let Some(category) = symbol_category(lexeme) {
            return category;
        }

        if self.is_number(lexeme) {
            return TokenCategory::Number;
        }

        if is_word(lexeme) {
            if self.is_keyword(lexeme) {
                return TokenCategory::Keyword;
            }
            return TokenCategory::Identifier;
        }

        TokenCategory::Unknown
    }

    /// Checks if a lexeme is a reserved word.
    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    /// Checks if a lexeme is a non-empty run of ASCII digits.
    pub fn is_number(&self, lexeme: &str) -> bool {
        !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Category of the fixed operator and punctuation lexemes.
fn symbol_category(lexeme: &str) -> Option<TokenCategory> {
    let category = match lexeme {
        ":=" => TokenCategory::AssignmentOperator,
        "<" | "=" => TokenCategory::ComparisonOperator,
        "+" | "-" | "*" | "/" => TokenCategory::ArithmeticOperator,
        ";" => TokenCategory::Semicolon,
        "(" => TokenCategory::LeftParen,
        ")" => TokenCategory::RightParen,
        _ => return None,
    };
    Some(category)
}

/// Letter followed by any number of letters or digits.
fn is_word(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue)
}
