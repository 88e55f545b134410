//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_USER_AGENT, GRAPHQL_HOSTS, HOMEPAGE_URL, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// One invocation performs exactly one lookup: a required professor name and
/// an optional legacy school identifier, plus ambient knobs for logging and
/// the HTTP client.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rmp_lookup",
    version,
    about = "Look up professor ratings from the command line"
)]
pub struct Config {
    /// Professor name to search for
    pub query: String,

    /// Legacy numeric school id to narrow the search
    #[arg(long)]
    pub school_id: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: String::new(),
            school_id: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// The set of URLs one lookup talks to.
///
/// `Default` yields the real site; tests substitute mock servers. The host
/// order is significant: the dispatcher consumes it front to back and stops
/// at the first usable answer.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Homepage fetched once for session warming.
    pub homepage: String,
    /// Ordered GraphQL endpoint URLs, tried in sequence.
    pub graphql_hosts: Vec<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            homepage: HOMEPAGE_URL.to_string(),
            graphql_hosts: GRAPHQL_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}
