//! Edge case and property tests for tinyc-lex
