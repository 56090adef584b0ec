//! Shipping tracking number classification.
//!
//! Every function here is pure: the same input always yields the same output
//! and nothing is cached or shared between calls.
//!
//! - [`validate_tracking_number`] - carrier-agnostic syntax check
//! - [`detect_shipping_provider`] - ordered carrier rule table
//! - [`generate_tracking_url`] - carrier tracking page link
//! - [`format_tracking_number`] - display spacing
//! - [`parse_tracking_number`] - validate, detect and link in one step

pub mod detect;
pub mod format;
pub mod info;
pub mod number;
pub mod provider;
pub mod url;

pub use detect::{
    ProviderRule, detect_shipping_provider, matching_rule, normalize_for_detection, provider_rules,
};
pub use format::format_tracking_number;
pub use info::{TrackingInfo, parse_tracking_number};
pub use number::{TrackingNumber, TrackingNumberError, ValidationResult, validate_tracking_number};
pub use provider::{ShippingProvider, UnknownProviderError, get_provider_display_name};
pub use url::generate_tracking_url;
