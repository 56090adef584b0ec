//! Display formatting for tracking numbers.

use super::number::strip_whitespace;
use super::provider::ShippingProvider;

/// Length of a standard `1Z` UPS number.
const UPS_1Z_LENGTH: usize = 18;

/// Join characters into space-separated groups of four.
fn group_by_four(chars: &[char]) -> String {
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-space a tracking number for display.
///
/// A `1Z` UPS number of exactly 18 characters is split as
/// `1Z XXXX XXXX XXXX XXXX`. Everything else is grouped in fours. The
/// provider is trusted as given; nothing is validated or detected here.
///
/// ```
/// use crystal_shipping_core::{ShippingProvider, format_tracking_number};
///
/// assert_eq!(
///     format_tracking_number("1Z999AA10123456784", ShippingProvider::Ups),
///     "1Z 999A A101 2345 6784"
/// );
/// assert_eq!(
///     format_tracking_number("9400111899223197428490", ShippingProvider::Usps),
///     "9400 1118 9922 3197 4284 90"
/// );
/// ```
#[must_use]
pub fn format_tracking_number(tracking_number: &str, provider: ShippingProvider) -> String {
    let chars: Vec<char> = strip_whitespace(tracking_number).chars().collect();

    if provider == ShippingProvider::Ups && chars.len() == UPS_1Z_LENGTH {
        if let Some(rest) = chars.strip_prefix(&['1', 'Z'][..]) {
            return format!("1Z {}", group_by_four(rest));
        }
    }

    group_by_four(&chars)
}
