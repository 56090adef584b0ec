//! Carrier tracking links.

use super::number::strip_whitespace;
use super::provider::ShippingProvider;

const USPS_TRACKING_URL: &str = "https://tools.usps.com/go/TrackConfirmAction?tLabels=";
const UPS_TRACKING_URL: &str = "https://www.ups.com/track?tracknum=";
const FEDEX_TRACKING_URL: &str = "https://www.fedex.com/fedextrack/?trknbr=";
const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Build the carrier's public tracking page URL for a number.
///
/// Whitespace is stripped from the number. `Other` gets a web search for
/// `"<number> tracking"`. The number is not validated here.
///
/// ```
/// use crystal_shipping_core::{ShippingProvider, generate_tracking_url};
///
/// assert_eq!(
///     generate_tracking_url("1Z 999 AA1 0123456784", ShippingProvider::Ups),
///     "https://www.ups.com/track?tracknum=1Z999AA10123456784"
/// );
/// ```
#[must_use]
pub fn generate_tracking_url(tracking_number: &str, provider: ShippingProvider) -> String {
    let cleaned = strip_whitespace(tracking_number);
    let base = match provider {
        ShippingProvider::Usps => USPS_TRACKING_URL,
        ShippingProvider::Ups => UPS_TRACKING_URL,
        ShippingProvider::Fedex => FEDEX_TRACKING_URL,
        ShippingProvider::Other => {
            let query = format!("{cleaned} tracking");
            return format!("{SEARCH_URL}{}", urlencoding::encode(&query));
        }
    };
    format!("{base}{}", urlencoding::encode(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usps_url() {
        assert_eq!(
            generate_tracking_url("9400 1118 9922 3197 4284 90", ShippingProvider::Usps),
            "https://tools.usps.com/go/TrackConfirmAction?tLabels=9400111899223197428490"
        );
    }

    #[test]
    fn test_ups_url() {
        let url = generate_tracking_url("1Z 999 AA1 0123456784", ShippingProvider::Ups);
        assert!(url.starts_with("https://www.ups.com/"));
        assert!(url.contains("1Z999AA10123456784"));
    }

    #[test]
    fn test_fedex_url() {
        assert_eq!(
            generate_tracking_url("123456789012", ShippingProvider::Fedex),
            "https://www.fedex.com/fedextrack/?trknbr=123456789012"
        );
    }

    #[test]
    fn test_other_url_is_encoded_search() {
        assert_eq!(
            generate_tracking_url("AB 12345", ShippingProvider::Other),
            "https://www.google.com/search?q=AB12345%20tracking"
        );
    }

    #[test]
    fn test_unvalidated_input_is_encoded() {
        assert_eq!(
            generate_tracking_url("a&b=c", ShippingProvider::Ups),
            "https://www.ups.com/track?tracknum=a%26b%3Dc"
        );
    }
}
