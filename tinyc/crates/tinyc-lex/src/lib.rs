//! tinyc-lex - Lexical Analyzer for the TINY teaching language
//!
//! This crate turns TINY source text into a sequence of classified tokens.
//! It has three parts:
//!
//! - [`source`] - the owned character buffer and its cursor
//! - [`lexer`] - whitespace/comment skipping and maximal-munch extraction
//! - [`classify`] - the keyword set and lexeme classification
//!
//! # Example Usage
//!
//! ```
//! use tinyc_lex::{KeywordSet, Lexer, TokenCategory};
//!
//! let keywords = KeywordSet::tiny();
//! let mut lexer = Lexer::new("if x then y := 4; end", &keywords);
//!
//! // Get tokens one at a time
//! let token = lexer.next_token();
//! assert_eq!(token.lexeme(), "if");
//! assert_eq!(token.category(), TokenCategory::Keyword);
//!
//! // Or iterate through the rest
//! for token in &mut lexer {
//!     println!("{token}");
//! }
//! ```
//!
//! # Token Categories
//!
//! - **Keyword**: `if`, `then`, `else`, `end`, `repeat`, `until`, `read`, `write`
//! - **Identifier**: `[a-zA-Z][a-zA-Z0-9]*`
//! - **Number**: `[0-9]+`
//! - **AssignmentOp**: `:=`
//! - **ComparisonOp**: `<`, `=`
//! - **ArithmeticOp**: `+`, `-`, `*`, `/`
//! - **Semicolon**, **LParen**, **RParen**: `;`, `(`, `)`
//! - **EOF**: end of input
//! - **Unknown**: any other character, including a lone `:`
//!
//! # Comments
//!
//! `// ...` runs to the end of the line. `{ ... }` runs to the first closing
//! brace and does not nest. A block comment left open swallows the rest of
//! the input without an error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod lexer;
pub mod source;
pub mod token;

mod edge_cases;

pub use classify::{KeywordSet, TokenClassifier, TINY_KEYWORDS};
pub use lexer::{tokenize, Lexer};
pub use source::CharacterSource;
pub use token::{Token, TokenCategory};
