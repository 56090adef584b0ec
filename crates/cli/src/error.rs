//! CLI error type.

use thiserror::Error;

use crystal_shipping_core::{TrackingNumberError, UnknownProviderError};

use crate::config::ConfigError;

/// Errors surfaced from a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a result to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracking number failed validation.
    #[error("{0}")]
    InvalidTrackingNumber(#[from] TrackingNumberError),

    /// `--provider` named an unknown carrier.
    #[error("{0}. Valid providers: usps, ups, fedex, other")]
    UnknownProvider(#[from] UnknownProviderError),

    /// One or more batch lines were invalid.
    #[error("{0} of {1} tracking numbers were invalid")]
    BatchHadInvalid(usize, usize),
}
