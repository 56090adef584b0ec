//! One-shot validate, classify and link.

use serde::{Deserialize, Serialize};

use super::detect::detect_shipping_provider;
use super::format::format_tracking_number;
use super::number::{TrackingNumber, TrackingNumberError};
use super::provider::ShippingProvider;
use super::url::generate_tracking_url;

/// A validated tracking number with its carrier and tracking link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingInfo {
    /// The number as entered, minus surrounding whitespace.
    pub tracking_number: String,
    /// Carrier detected from the number.
    pub provider: ShippingProvider,
    /// Carrier tracking page, or a web search for `Other`.
    pub tracking_url: String,
}

impl TrackingInfo {
    /// Classify an already-validated number.
    #[must_use]
    pub fn from_number(number: TrackingNumber) -> Self {
        let provider = detect_shipping_provider(number.as_str());
        let tracking_url = generate_tracking_url(number.as_str(), provider);
        Self {
            tracking_number: number.into_inner(),
            provider,
            tracking_url,
        }
    }

    #[must_use]
    pub const fn provider_display_name(&self) -> &'static str {
        self.provider.display_name()
    }

    /// The number spaced for display, per [`format_tracking_number`].
    #[must_use]
    pub fn formatted_number(&self) -> String {
        format_tracking_number(&self.tracking_number, self.provider)
    }
}

/// Validate a tracking number, detect its carrier and build its link.
///
/// # Errors
///
/// Returns the [`TrackingNumberError`] from validation when the input is
/// malformed; no `TrackingInfo` is produced in that case.
///
/// ```
/// use crystal_shipping_core::{ShippingProvider, parse_tracking_number};
///
/// let info = parse_tracking_number(" 1Z 999 AA1 0123456784 ").unwrap();
/// assert_eq!(info.tracking_number, "1Z 999 AA1 0123456784");
/// assert_eq!(info.provider, ShippingProvider::Ups);
///
/// let err = parse_tracking_number("").unwrap_err();
/// assert_eq!(err.to_string(), "Tracking number is required");
/// ```
pub fn parse_tracking_number(tracking_number: &str) -> Result<TrackingInfo, TrackingNumberError> {
    TrackingNumber::parse(tracking_number).map(TrackingInfo::from_number)
}
