//! formcheck CLI - validate and sanitize submitted field data from the shell.
//!
//! # Commands
//!
//! - `formcheck validate --fields <file> --rules <file>` - Validate field data
//! - `formcheck sanitize --fields <file>` - Print sanitized field data
//! - `formcheck rules` - List the registered validation rules
//!
//! Field, rule and configuration files may be JSON or TOML; `-` reads JSON
//! from standard input.

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod loader;

use commands::{rules, sanitize, validate};
use error::CliResult;

/// Exit status when the field data fails validation
const EXIT_INVALID: u8 = 1;

/// Exit status for unreadable input or bad arguments
const EXIT_ERROR: u8 = 2;

/// formcheck - declarative field validation
#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version)]
#[command(about = "Validate and sanitize submitted field data against declarative rules")]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate field data against a rule file
    #[command(alias = "v")]
    Validate(ValidateArgs),

    /// Print field data after sanitization
    #[command(alias = "s")]
    Sanitize(SanitizeArgs),

    /// List the registered validation rules
    #[command(alias = "r")]
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ValidateArgs {
    /// Field data file (.json or .toml, `-` for stdin)
    #[arg(short, long)]
    fields: String,

    /// Rule specification file (.json or .toml)
    #[arg(short, long)]
    rules: String,

    /// Validator configuration file (.json or .toml)
    #[arg(short, long, env = "FORMCHECK_CONFIG")]
    config: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct SanitizeArgs {
    /// Field data file (.json or .toml, `-` for stdin)
    #[arg(short, long)]
    fields: String,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> CliResult<bool> {
    match command {
        Commands::Validate(args) => validate::run(&validate::ValidateOptions {
            fields: &args.fields,
            rules: &args.rules,
            config: args.config.as_deref(),
            format: args.format,
        }),
        Commands::Sanitize(args) => sanitize::run(&args.fields).map(|()| true),
        Commands::Rules { format } => rules::run(format).map(|()| true),
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the flag-derived level.
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
