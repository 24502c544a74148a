use std::io::{self, Write};

use crate::{config::Config, errors::errors::Error, Snippet};

use super::tokens::Token;

/// Receives tokens and errors as the scanner produces them.
///
/// Both callbacks default to doing nothing, so an observer only overrides
/// what it cares about. Observing never changes the scan result.
pub trait ScanObserver {
    fn on_token(&mut self, _token: &Token) {}

    fn on_error(&mut self, _error: &Error) {}
}

pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Collects the rendered form of everything it sees, in production order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<String>,
}

impl ScanObserver for RecordingObserver {
    fn on_token(&mut self, token: &Token) {
        self.events.push(token.to_string());
    }

    fn on_error(&mut self, error: &Error) {
        self.events.push(error.to_string());
    }
}

/// Writes token renderings to `out` and error renderings to `err`.
///
/// Write failures cannot interrupt the scan, so the first one is kept and
/// handed back by [`WriterObserver::finish`]; nothing more is written after it.
pub struct WriterObserver<'s, O: Write, E: Write> {
    out: O,
    err: E,
    source: &'s str,
    echo_tokens: bool,
    pretty_errors: bool,
    failure: Option<io::Error>,
}

impl<'s, O: Write, E: Write> WriterObserver<'s, O, E> {
    pub fn new(out: O, err: E, source: &'s str, config: &Config) -> Self {
        WriterObserver {
            out,
            err,
            source,
            echo_tokens: config.echo_tokens,
            pretty_errors: config.pretty_errors,
            failure: None,
        }
    }

    /// Flushes both sinks and reports the first write failure, if any.
    pub fn finish(mut self) -> io::Result<(O, E)> {
        if let Some(failure) = self.failure.take() {
            return Err(failure);
        }

        self.out.flush()?;
        self.err.flush()?;
        Ok((self.out, self.err))
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(failure) = result {
            self.failure.get_or_insert(failure);
        }
    }
}

impl<O: Write, E: Write> ScanObserver for WriterObserver<'_, O, E> {
    fn on_token(&mut self, token: &Token) {
        if !self.echo_tokens || self.failure.is_some() {
            return;
        }

        let result = writeln!(self.out, "{}", token);
        self.record(result);
    }

    fn on_error(&mut self, error: &Error) {
        if self.failure.is_some() {
            return;
        }

        let mut result = writeln!(self.err, "{}", error);
        if result.is_ok() && self.pretty_errors {
            result = write!(self.err, "{}", Snippet::new(error, self.source));
        }
        self.record(result);
    }
}
