#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, tokenize_with, ScanResult};

/// Where in the source something was found. Lines and columns are 1-based,
/// columns count characters rather than bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

/// Returns the text of the 1-based `line` without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    let index = line.checked_sub(1)? as usize;

    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\n    Testing { }\n";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 2), Some("second"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 4), Some("    Testing { }"));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_snippet_points_at_column() {
        let source = "var a = 1;\n  var b = @;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: '@' },
            Position {
                line: 2,
                column: 11,
                file: Rc::new(String::from("test.lox")),
            },
        );

        let rendered = Snippet::new(&error, source).to_string();

        assert_eq!(
            rendered,
            "Error: UnexpectedCharacter\n-> test.lox\n  |\n2 | var b = @;\n  | --------^\n"
        );
    }

    #[test]
    fn test_snippet_includes_tip() {
        let source = "print \"abc";
        let error = Error::new(
            ErrorImpl::UnterminatedString,
            Position {
                line: 1,
                column: 7,
                file: Rc::new(String::from("test.lox")),
            },
        );

        let rendered = Snippet::new(&error, source).to_string();

        assert!(rendered.starts_with("Error: UnterminatedString (add a closing"));
        assert!(rendered.contains("1 | print \"abc\n"));
        assert!(rendered.ends_with("  | ------^\n"));
    }
}

/// Human-friendly rendering of an error with the offending source line.
///
/// ```text
/// Error: UnexpectedCharacter
/// -> main.lox
///    |
/// 20 | var a = @;
///    | --------^
/// ```
pub struct Snippet<'a> {
    error: &'a Error,
    source: &'a str,
}

impl<'a> Snippet<'a> {
    pub fn new(error: &'a Error, source: &'a str) -> Self {
        Snippet { error, source }
    }
}

impl Display for Snippet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.error.get_position();

        let line_string = position.line.to_string();
        let padding = line_string.len() + 2;

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error.get_error_name())?;
        } else {
            writeln!(
                f,
                "Error: {} ({})",
                self.error.get_error_name(),
                self.error.get_tip()
            )?;
        }
        writeln!(f, "-> {}", position.file)?;
        writeln!(f, "{:>padding$}", "|")?;

        let Some(line_text) = get_line_at_position(self.source, position.line) else {
            return Ok(());
        };

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = (position.column as usize)
            .saturating_sub(removed_whitespace)
            .max(1);

        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}
