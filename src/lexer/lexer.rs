use std::rc::Rc;

use tracing::{debug, info_span, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    observer::{NoopObserver, ScanObserver},
    tokens::{Literal, Token, TokenKind, TokenStream, RESERVED_LOOKUP},
};

/// Everything one scan pass produced.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub tokens: TokenStream,
    pub errors: Vec<Error>,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (TokenStream, bool) {
        let has_errors = self.has_errors();
        (self.tokens, has_errors)
    }
}

pub struct Lexer<'a, 'o> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    line: u32,
    /// Byte offset of the first character on the current line.
    line_start: usize,
    file: Rc<String>,
    observer: &'o mut dyn ScanObserver,
}

impl<'a, 'o> Lexer<'a, 'o> {
    pub fn new(source: &'a str, file: Option<String>, observer: &'o mut dyn ScanObserver) -> Self {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: Cursor::new(source),
            tokens: vec![],
            errors: vec![],
            line: 1,
            line_start: 0,
            file: file_name,
            observer,
        }
    }

    /// Runs the scan to the end of the input. Consumes the lexer, so a
    /// lexer can only ever make one pass.
    pub fn tokenize(mut self) -> ScanResult {
        let span = info_span!("tokenize", file = %self.file);
        let _entered = span.enter();

        while !self.cursor.at_eof() {
            self.cursor.start_token();
            self.scan_token();
        }

        self.cursor.start_token();
        let line = self.line;
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "scan finished"
        );

        ScanResult {
            tokens: TokenStream::new(self.tokens),
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let Some(c) = self.cursor.advance() else {
            return;
        };

        if let Some(kind) = TokenKind::single_char(c) {
            self.add_token(kind);
            return;
        }

        if let Some((single, with_equal)) = TokenKind::with_optional_equal(c) {
            let kind = if self.cursor.advance_if('=') {
                with_equal
            } else {
                single
            };
            self.add_token(kind);
            return;
        }

        match c {
            ' ' | '\t' | '\r' => {}
            '\n' => self.newline(),
            '/' => {
                if self.cursor.advance_if('/') {
                    // The newline is left for the main loop so it is counted.
                    self.cursor.advance_while(|c| c != '\n');
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            character => {
                let position = self.position();
                self.error(ErrorImpl::UnexpectedCharacter { character }, position);
            }
        }
    }

    fn string(&mut self) {
        let start = self.position();

        loop {
            match self.cursor.advance() {
                Some('"') => break,
                Some('\n') => self.newline(),
                Some(_) => {}
                None => {
                    self.error(ErrorImpl::UnterminatedString, start);
                    return;
                }
            }
        }

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.push(MK_TOKEN!(
            TokenKind::String,
            String::from(lexeme),
            Literal::String(String::from(value)),
            start.line
        ));
    }

    fn number(&mut self) {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        // At most one decimal point, and only when a digit follows it.
        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.cursor.lexeme();
        let Ok(value) = lexeme.parse::<f64>() else {
            unreachable!("digit run {lexeme:?} is always a valid float");
        };

        let line = self.line;
        self.push(MK_TOKEN!(
            TokenKind::Number,
            String::from(lexeme),
            Literal::Number(value),
            line
        ));
    }

    fn identifier(&mut self) {
        self.cursor
            .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let kind = RESERVED_LOOKUP
            .get(self.cursor.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.cursor.pos();
    }

    /// Position of the token currently being scanned.
    fn position(&self) -> Position {
        let column = self
            .cursor
            .slice(self.line_start, self.cursor.token_start())
            .chars()
            .count() as u32
            + 1;

        Position {
            line: self.line,
            column,
            file: Rc::clone(&self.file),
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let line = self.line;
        self.push(MK_TOKEN!(kind, String::from(self.cursor.lexeme()), line));
    }

    fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.observer.on_token(&token);
        self.tokens.push(token);
    }

    fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        debug!(line = error.get_line(), "{}", error.get_message());
        self.observer.on_error(&error);
        self.errors.push(error);
    }
}

pub fn tokenize(source: &str, file: Option<String>) -> ScanResult {
    tokenize_with(source, file, &mut NoopObserver)
}

/// Like [`tokenize`], reporting every token and error to `observer` as it
/// is produced.
pub fn tokenize_with(
    source: &str,
    file: Option<String>,
    observer: &mut dyn ScanObserver,
) -> ScanResult {
    Lexer::new(source, file, observer).tokenize()
}
