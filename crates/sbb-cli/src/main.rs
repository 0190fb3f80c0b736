//! SBB CLI - build strings from recipes and tokens
//!
//! This is the main entry point for the `sbb` binary. It loads configuration,
//! sets up logging and dispatches to the subcommand handlers.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod recipe;

use clap::ValueEnum;
use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::{io, process};
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can shape it
    let config = match Config::load_with_file(cli.config.as_deref()).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.use_color()),
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

/// Report `error` on stderr and exit with its code
fn exit_with(error: &Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));

    if error.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = match cli.output {
        Some(format) => format,
        None => OutputFormat::from_str(&config.output.format, true).map_err(Error::config)?,
    };
    let output = OutputWriter::new(format, config.output.trailing_newline);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Build(args) => handlers::handle_build(args, &output, &mut stdout),
        Commands::Join(args) => handlers::handle_join(args, &output, &mut stdout),
        Commands::Wrap(args) => handlers::handle_wrap(args, &output, &mut stdout),
        Commands::Completions(args) => handlers::handle_completions(args, &mut stdout),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config =
        LoggingConfig::from_verbosity(verbosity).with_file_config(&config.logging, verbosity);

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
