//! Lexical analysis for the scripting language.
//!
//! This module contains the scanner that turns source text into a
//! stream of tokens for a parser. It handles:
//!
//! - Punctuation and one-or-two character operators
//! - String and number literals, identifiers and reserved words
//! - Line comments and whitespace
//! - Line tracking and error recovery, so one bad character never stops a scan

pub mod cursor;
pub mod lexer;
pub mod observer;
pub mod tokens;
