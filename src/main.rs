//! Command-line entry point: `lox-scanner tokenize <FILENAME>`.
//!
//! Prints every token to stdout and every lexical error to stderr while the
//! file is scanned, then exits with status 65 if any error was reported.

use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_scanner::{
    config::{Config, DEFAULT_LOG_DIRECTIVE, EXIT_DATA_ERROR},
    lexer::observer::WriterObserver,
    tokenize_with,
};

#[derive(Parser, Debug)]
#[command(name = "lox-scanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for Lox source files", long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true, env = "LOX_SCANNER_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, global = true, env = "LOX_SCANNER_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a file and print its tokens
    Tokenize(TokenizeCommand),
}

#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to scan
    filename: PathBuf,

    /// Show the offending source line under each error
    #[arg(long, env = "LOX_SCANNER_PRETTY")]
    pretty: bool,

    /// Only report errors, do not print tokens
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Commands::Tokenize(command) = cli.command;

    let config = Config {
        echo_tokens: !command.quiet,
        pretty_errors: command.pretty,
        verbose: cli.verbose,
        color: !cli.no_color,
    };

    init_logging(&config)?;

    run_tokenize(&command.filename, &config)
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = match config.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn run_tokenize(path: &Path, config: &Config) -> Result<ExitCode> {
    let source = read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "scanning");

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let mut observer = WriterObserver::new(io::stdout().lock(), io::stderr().lock(), &source, config);
    let result = tokenize_with(&source, file_name, &mut observer);
    observer.finish().context("failed to write scanner output")?;

    if result.has_errors() {
        debug!(errors = result.errors.len(), "scan reported errors");
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
