//! Identifier, keyword and number lexing.

use crate::classify::is_ident_continue;
use crate::token::Token;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of ASCII letters and digits starting at a
    /// letter. The classifier decides between keyword and identifier.
    pub fn lex_word(&mut self) -> Token {
        while self.source.peek().is_some_and(is_ident_continue) {
            self.source.advance();
        }
        self.finish_token()
    }

    /// Lexes an unsigned integer literal.
    ///
    /// Digits only: there is no sign, decimal point or exponent in TINY.
    pub fn lex_number(&mut self) -> Token {
        while self.source.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.source.advance();
        }
        self.finish_token()
    }
}
