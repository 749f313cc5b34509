//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::external::soa::Dataset;

/// HTTP gateway serving topic and COVID datasets as JSON
#[derive(Parser, Debug)]
#[command(name = "soa-data-rs")]
#[command(about = "HTTP gateway serving topic and COVID datasets as JSON")]
#[command(long_about = "
soa-data-rs serves the topics, worldwide COVID and Barcelona COVID datasets
of an upstream data API over three POST endpoints.

EXAMPLES:
    # Start the server with default configuration
    soa-data-rs serve

    # Start server on custom host and port
    soa-data-rs serve --host 0.0.0.0 --port 8080

    # Point at a different upstream data API
    soa-data-rs serve --upstream-url http://soa-api:5000

    # Use custom configuration file
    soa-data-rs --config /path/to/config.toml serve

    # Check configuration without starting server
    soa-data-rs serve --dry-run

    # Fetch one dataset from the upstream and print it
    soa-data-rs fetch covid-world
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Read a single TOML file instead of the layered `config/` directory.
    /// `SOA_*` environment variables still override its values.
    ///
    /// Example: --config /etc/soa-data-rs/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects the `{environment}.toml` overlay instead of `SOA_APP_ENV`.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   soa-data-rs serve                           # Start with defaults
    ///   soa-data-rs serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   soa-data-rs serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and --verbose/--quiet.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Base URL of the upstream data API
        #[arg(long, value_name = "URL", value_parser = super::validation::validate_upstream_url)]
        upstream_url: Option<String>,

        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch one dataset from the upstream and print it as JSON
    ///
    /// Exits non-zero when the upstream fails or has nothing to return.
    ///
    /// Examples:
    ///   soa-data-rs fetch topics
    ///   soa-data-rs fetch covid-barcelona
    Fetch {
        /// Dataset to fetch
        #[arg(value_enum)]
        dataset: Dataset,

        /// Base URL of the upstream data API
        #[arg(long, value_name = "URL", value_parser = super::validation::validate_upstream_url)]
        upstream_url: Option<String>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
