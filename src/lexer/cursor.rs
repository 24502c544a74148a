//! Character cursor over the source text.
//!
//! The cursor only moves forward. Lookahead is done by peeking, so nothing
//! has to be pushed back once it turns out not to belong to a token.

use std::str::Chars;

pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    /// Byte offset where the token being scanned starts.
    token_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            chars: source.chars(),
            token_start: 0,
        }
    }

    /// Current byte offset into the source.
    pub fn pos(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn at_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// The character after [`Cursor::peek`]. Only the decimal point rule needs it.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds, stopping before the first
    /// one that fails it.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.chars.next();
        }
    }

    pub fn start_token(&mut self) {
        self.token_start = self.pos();
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Source text consumed since the last [`Cursor::start_token`].
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.token_start..self.pos()]
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}
