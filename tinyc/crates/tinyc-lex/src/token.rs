//! Token definitions for the TINY language.

use std::fmt;

/// The closed set of categories a lexeme can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Reserved word: `if`, `then`, `else`, `end`, `repeat`, `until`, `read`, `write`.
    Keyword,
    /// Letter followed by letters or digits, not reserved.
    Identifier,
    /// Unsigned integer literal.
    Number,
    /// `:=`
    AssignmentOperator,
    /// `<` or `=`
    ComparisonOperator,
    /// `+`, `-`, `*` or `/`
    ArithmeticOperator,
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of input marker.
    EndOfInput,
    /// Anything the language does not recognize.
    Unknown,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 11] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::AssignmentOperator,
        TokenCategory::ComparisonOperator,
        TokenCategory::ArithmeticOperator,
        TokenCategory::Semicolon,
        TokenCategory::LeftParen,
        TokenCategory::RightParen,
        TokenCategory::EndOfInput,
        TokenCategory::Unknown,
    ];

    /// Returns the canonical display name used in token listings.
    ///
    /// # Example
    ///
    /// ```
    /// use tinyc_lex::TokenCategory;
    ///
    /// assert_eq!(TokenCategory::AssignmentOperator.name(), "AssignmentOp");
    /// assert_eq!(TokenCategory::EndOfInput.name(), "EOF");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Number => "Number",
            TokenCategory::AssignmentOperator => "AssignmentOp",
            TokenCategory::ComparisonOperator => "ComparisonOp",
            TokenCategory::ArithmeticOperator => "ArithmeticOp",
            TokenCategory::Semicolon => "Semicolon",
            TokenCategory::LeftParen => "LParen",
            TokenCategory::RightParen => "RParen",
            TokenCategory::EndOfInput => "EOF",
            TokenCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are created once, when the lexer classifies a lexeme, and are not
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    lexeme: String,
    category: TokenCategory,
}

impl Token {
    /// Creates a token from a lexeme and its category.
    pub fn new(lexeme: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
        }
    }

    /// Creates the end-of-input token, which has an empty lexeme.
    pub fn eof() -> Self {
        Self::new(String::new(), TokenCategory::EndOfInput)
    }

    /// The source text of this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The category assigned by the classifier.
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.category == TokenCategory::EndOfInput
    }

    /// Consumes the token, returning its lexeme.
    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

impl fmt::Display for Token {
    /// Formats the token as one listing record: `<lexeme>, <category>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lexeme, self.category)
    }
}
