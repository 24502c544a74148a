//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text the token was scanned from
/// * `$literal` - The decoded literal, omitted for tokens that carry none
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus, String::from("+"), 1);
/// let number = MK_TOKEN!(TokenKind::Number, String::from("4"), Literal::Number(4.0), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            line: $line,
        }
    };
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: Some($literal),
            line: $line,
        }
    };
}
