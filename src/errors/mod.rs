//! Error types and diagnostics for the scanner.
//!
//! Lexical errors are recoverable: the scanner records them with the
//! position they were found at and keeps going. This module contains:
//!
//! - The `Error` wrapper pairing an error kind with its source position
//! - The `ErrorImpl` kinds (unexpected character, unterminated string)
//! - Tips shown alongside the rendered source snippet

pub mod errors;
