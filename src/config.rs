//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Cart summary output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON summary.
    Json,

    /// Table of cart lines followed by totals.
    Table,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Lookbook configuration
#[derive(Debug, Parser)]
#[command(name = "lookbook", about = "Summarise a shopping cart under its look promotion", long_about = None)]
pub struct Config {
    /// Product catalog (JSON or YAML)
    #[arg(short, long, env = "LOOKBOOK_CATALOG")]
    pub catalog: PathBuf,

    /// Output format (json, table)
    #[arg(short, long, env = "LOOKBOOK_OUTPUT", value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Identifiers of the products in the cart
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
