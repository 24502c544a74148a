//! Run configuration for the `lox-scanner` binary.
//!
//! Settings come from command-line flags, each of which can also be set
//! through a `LOX_SCANNER_*` environment variable. Log filtering follows
//! `RUST_LOG` unless verbose output was asked for.

/// Process exit status used when the scan recorded any lexical error.
pub const EXIT_DATA_ERROR: u8 = 65;

/// Log level used when neither `--verbose` nor `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Print every token to stdout as it is scanned.
    pub echo_tokens: bool,

    /// Follow each error line with a snippet of the offending source.
    pub pretty_errors: bool,

    /// Log at debug level, ignoring `RUST_LOG`.
    pub verbose: bool,

    /// Use ANSI colors in log output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            echo_tokens: true,
            pretty_errors: false,
            verbose: false,
            color: true,
        }
    }
}

impl Config {
    /// Returns the log filter directive, or `None` when `RUST_LOG` should decide.
    pub fn log_directive(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_echoes_tokens() {
        let config = Config::default();

        assert!(config.echo_tokens);
        assert!(!config.pretty_errors);
        assert!(!config.verbose);
        assert!(config.color);
    }

    #[test]
    fn test_log_directive() {
        let mut config = Config::default();
        assert_eq!(config.log_directive(), None);

        config.verbose = true;
        assert_eq!(config.log_directive(), Some("debug"));
    }
}
