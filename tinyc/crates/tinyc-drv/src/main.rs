//! tinyc - TINY scanner command-line entry point.
//!
//! Reads a TINY source file, prints each token as it is found and writes the
//! token listing to the output file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tinyc_drv::{Config, DriverError, Session};

/// tinyc - lexical scanner for the TINY language
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a TINY program into a token listing", long_about = None)]
struct Cli {
    /// TINY source file (default: test.tny)
    input: Option<PathBuf>,

    /// Token listing file (default: tokens.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print a line for every token found
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long, env = "TINYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TINYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TINYC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let config = apply_overrides(config, &cli);

    init_logging(config.verbose, cli.no_color)?;

    let session = Session::new(config);
    let stdout = std::io::stdout();
    session
        .run(&mut stdout.lock())
        .with_context(|| format!("failed to scan {}", session.config.input.display()))?;
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> tinyc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Command-line flags win over the configuration file.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if cli.quiet {
        config.echo_tokens = false;
    }
    if cli.verbose {
        config.verbose = true;
    }
    config
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token lines on stdout.
fn init_logging(verbose: bool, no_color: bool) -> tinyc_drv::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}
