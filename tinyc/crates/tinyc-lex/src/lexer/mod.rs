//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, dispatch and classification of finished lexemes
//! - `comment` - Whitespace and comment skipping
//! - `word` - Identifier, keyword and number extents
//! - `operator` - Operator and punctuation extents

mod comment;
mod core;
mod operator;
mod word;

pub use self::core::{tokenize, Lexer};
