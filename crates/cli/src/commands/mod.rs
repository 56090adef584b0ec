//! CLI command implementations.

pub mod batch;
pub mod classify;

use crystal_shipping_core::{ShippingProvider, detect_shipping_provider};

use crate::error::CliError;

/// Use the operator's `--provider` if given, otherwise detect one.
///
/// # Errors
///
/// Returns an error if `provider` is not a known carrier tag.
pub fn resolve_provider(
    tracking_number: &str,
    provider: Option<&str>,
) -> Result<ShippingProvider, CliError> {
    match provider {
        Some(tag) => Ok(tag.parse()?),
        None => Ok(detect_shipping_provider(tracking_number)),
    }
}
