//! Crystal Shipping CLI - Tracking number checks for fulfillment operators.
//!
//! # Usage
//!
//! ```bash
//! # Which carrier issued this number?
//! cs-cli detect 1Z999AA10123456784
//!
//! # Is it well-formed?
//! cs-cli validate "9400 1118 9922 3197 4284 90"
//!
//! # Everything at once, as JSON
//! cs-cli parse 1Z999AA10123456784 --json
//!
//! # Tracking link or display format, optionally forcing the carrier
//! cs-cli url 123456789012 --provider fedex
//! cs-cli format 1Z999AA10123456784
//!
//! # Classify a file of numbers (one per line), or stdin
//! cs-cli batch shipments.txt
//! ```
//!
//! # Commands
//!
//! - `detect` - Print the detected carrier tag
//! - `validate` - Check syntax; exits 1 when invalid
//! - `parse` - Validate, detect, link and format
//! - `url` - Print the carrier tracking URL
//! - `format` - Print the display form
//! - `batch` - Classify many numbers; exits 1 if any were invalid

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use config::{CliConfig, LogFormat, OutputFormat};
use error::CliError;
use output::Output;

#[derive(Parser)]
#[command(name = "cs-cli")]
#[command(author, version, about = "Crystal Shipping tracking number tools")]
struct Cli {
    /// Print results as JSON lines (overrides `CS_OUTPUT_FORMAT`)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect which carrier issued a tracking number
    Detect {
        /// Tracking number
        number: String,
    },
    /// Check that a tracking number is well-formed
    Validate {
        /// Tracking number
        number: String,
    },
    /// Validate, detect the carrier and build the tracking link
    Parse {
        /// Tracking number
        number: String,
    },
    /// Print the carrier tracking URL
    Url(RenderArgs),
    /// Print the tracking number spaced for display
    Format(RenderArgs),
    /// Classify one tracking number per line from a file or stdin
    Batch {
        /// Input file (`-` or omitted for stdin)
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Tracking number
    number: String,

    /// Carrier (`usps`, `ups`, `fedex`, `other`); detected when omitted
    #[arg(short, long)]
    provider: Option<String>,
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "crystal_shipping_cli=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::from_env();
    init_tracing(config.as_ref().map_or(LogFormat::default(), |c| c.log));

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: CliConfig) -> Result<(), CliError> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let mut out = Output::stdout(format);

    match cli.command {
        Commands::Detect { number } => commands::classify::detect(&number, &mut out),
        Commands::Validate { number } => commands::classify::validate(&number, &mut out),
        Commands::Parse { number } => commands::classify::parse(&number, &mut out),
        Commands::Url(args) => {
            commands::classify::url(&args.number, args.provider.as_deref(), &mut out)
        }
        Commands::Format(args) => {
            commands::classify::format(&args.number, args.provider.as_deref(), &mut out)
        }
        Commands::Batch { file } => commands::batch::run(file.as_deref(), &mut out),
    }
}
