//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CS_OUTPUT_FORMAT` - `text` or `json` result output (default: text)
//! - `CS_LOG_FORMAT` - `text` or `json` log lines (default: text)
//! - `RUST_LOG` - Log filter (default: `crystal_shipping_cli=info`)

use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn parse_format(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(false),
        "json" => Ok(true),
        other => Err(format!("expected `text` or `json`, got `{other}`")),
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_format(s).map(|json| if json { Self::Json } else { Self::Text })
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_format(s).map(|json| if json { Self::Json } else { Self::Text })
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Result output format
    pub output: OutputFormat,
    /// Log line format
    pub log: LogFormat,
}

impl CliConfig {
    /// Load configuration from the process environment (after `.env`).
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            output: optional_var(&lookup, "CS_OUTPUT_FORMAT")?.unwrap_or_default(),
            log: optional_var(&lookup, "CS_LOG_FORMAT")?.unwrap_or_default(),
        })
    }
}

fn optional_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.parse()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e))
        })
        .transpose()
}
