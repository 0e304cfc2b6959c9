//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and programmatic configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PROXY_ENDPOINT, DEFAULT_USER_AGENT,
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Field-level configuration validation error.
#[derive(Debug)]
pub struct ConfigValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the constraint that was violated.
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

/// Scanner configuration.
///
/// Doubles as the CLI surface (via clap derive) and the programmatic
/// configuration for library consumers, which construct it with
/// `Config { ..Default::default() }` and never touch the CLI-only fields.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "friction_scan",
    about = "Scans a web page for semantic friction points that confuse LLM agents"
)]
pub struct Config {
    /// Target page URL (scheme optional; https:// is assumed)
    pub url: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Cross-origin relay endpoint that wraps fetched pages in a JSON envelope
    #[arg(long, default_value = DEFAULT_PROXY_ENDPOINT)]
    pub proxy_endpoint: String,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header for relay requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print detected points as JSON instead of the plain report
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Validates field-level constraints that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.proxy_endpoint.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "proxy_endpoint",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            proxy_endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            json: false,
        }
    }
}
