//! Operator and punctuation lexing.

use crate::token::Token;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes assignment or a lone colon.
    ///
    /// Handles: `:=`, `:`
    pub fn lex_colon(&mut self) -> Token {
        self.source.advance();
        self.source.match_char('=');
        self.finish_token()
    }

    /// Lexes a one-character token.
    ///
    /// Covers `< = + - * / ; ( )` and any character TINY does not know.
    pub fn lex_single(&mut self) -> Token {
        self.source.advance();
        self.finish_token()
    }
}
