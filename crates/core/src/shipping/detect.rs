//! Carrier detection from tracking number shape.
//!
//! Detection walks an ordered rule table and returns the first match. Carrier
//! formats overlap, so order is part of the contract:
//!
//! - UPS Mail Innovations numbers are 22 digits starting with `927`, which
//!   also fits the USPS all-digit shape. Both USPS digit rules exclude the
//!   `927` prefix and the UPS `927` rule sits ahead of the USPS fallback.
//! - The bare 9-12 digit UPS rule is broad and will claim many numeric
//!   strings from other carriers.
//!
//! There is no FedEx rule. FedEx numbers land on whichever UPS/USPS digit
//! rule they happen to fit, or `Other`.

use std::sync::LazyLock;

use regex::Regex;

use super::number::strip_whitespace;
use super::provider::ShippingProvider;

/// One entry in the carrier rule table.
#[derive(Debug)]
pub struct ProviderRule {
    /// Carrier this rule identifies.
    pub provider: ShippingProvider,
    /// Short label for the format, used in diagnostics.
    pub name: &'static str,
    pattern: Regex,
    excluded_prefix: Option<&'static str>,
}

impl ProviderRule {
    fn new(
        provider: ShippingProvider,
        name: &'static str,
        pattern: &str,
        excluded_prefix: Option<&'static str>,
    ) -> Self {
        Self {
            provider,
            name,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            excluded_prefix,
        }
    }

    /// Whether a normalized (whitespace-free, uppercase) number fits this rule.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
            && self
                .excluded_prefix
                .is_none_or(|prefix| !normalized.starts_with(prefix))
    }
}

// Digit classes are spelled `[0-9]` since `\d` also matches non-ASCII digits.
static PROVIDER_RULES: LazyLock<Vec<ProviderRule>> = LazyLock::new(|| {
    use ShippingProvider::{Ups, Usps};

    vec![
        ProviderRule::new(Usps, "usps-standard", r"^9[2345][0-9]{18,20}$", Some("927")),
        ProviderRule::new(Usps, "usps-international", r"^[A-Z]{2}[0-9]{9}US$", None),
        ProviderRule::new(Usps, "usps-global-express", r"^82[0-9]{8}US$", None),
        ProviderRule::new(Ups, "ups-1z", r"^1Z[A-Z0-9]{15,18}$", None),
        ProviderRule::new(Ups, "ups-mail-innovations", r"^927[0-9]{19}$", None),
        ProviderRule::new(Ups, "ups-freight", r"^PRO[0-9]+$", None),
        ProviderRule::new(Ups, "ups-ground", r"^T[0-9]{10}$", None),
        ProviderRule::new(Ups, "ups-numeric", r"^[0-9]{9,12}$", None),
        ProviderRule::new(Usps, "usps-numeric", r"^[0-9]{20,22}$", Some("927")),
    ]
});

/// The carrier rule table in match priority order.
#[must_use]
pub fn provider_rules() -> &'static [ProviderRule] {
    &PROVIDER_RULES
}

/// Strip whitespace and uppercase, the form every rule matches against.
#[must_use]
pub fn normalize_for_detection(tracking_number: &str) -> String {
    strip_whitespace(tracking_number).to_uppercase()
}

/// The first rule matching `tracking_number`, if any.
#[must_use]
pub fn matching_rule(tracking_number: &str) -> Option<&'static ProviderRule> {
    let normalized = normalize_for_detection(tracking_number);
    provider_rules().iter().find(|rule| rule.matches(&normalized))
}

/// Identify the carrier that issued a tracking number.
///
/// Accepts any input, validated or not. Unrecognized shapes, including the
/// empty string, yield [`ShippingProvider::Other`].
///
/// ```
/// use crystal_shipping_core::{ShippingProvider, detect_shipping_provider};
///
/// assert_eq!(detect_shipping_provider("1z999aa10123456784"), ShippingProvider::Ups);
/// assert_eq!(detect_shipping_provider("9400 1118 9922 3197 4284 90"), ShippingProvider::Usps);
/// assert_eq!(detect_shipping_provider("not-a-tracking-number"), ShippingProvider::Other);
/// ```
#[must_use]
pub fn detect_shipping_provider(tracking_number: &str) -> ShippingProvider {
    matching_rule(tracking_number).map_or(ShippingProvider::Other, |rule| rule.provider)
}
