//! Integration tests for the tracking number classifier.
//!
//! These tests drive the public API the way the admin fulfillment flow does:
//! live detection while typing, validation on submit, then link and label
//! rendering on the order detail view.

use crystal_shipping_core::{
    ShippingProvider, TrackingNumberError, detect_shipping_provider, format_tracking_number,
    generate_tracking_url, get_provider_display_name, parse_tracking_number,
    validate_tracking_number,
};
use crystal_shipping_integration_tests::SAMPLE_NUMBERS;

// =============================================================================
// Detection Tests
// =============================================================================

#[test]
fn test_sample_numbers_classify() {
    for (number, expected) in SAMPLE_NUMBERS {
        assert_eq!(
            detect_shipping_provider(number).as_str(),
            *expected,
            "wrong provider for {number}"
        );
    }
}

#[test]
fn test_detection_ignores_case_and_spacing() {
    for (number, _) in SAMPLE_NUMBERS {
        let spaced = format_tracking_number(number, ShippingProvider::Other).to_lowercase();
        assert_eq!(
            detect_shipping_provider(&spaced),
            detect_shipping_provider(number),
            "spacing changed classification of {number}"
        );
    }
}

#[test]
fn test_mail_innovations_is_ups() {
    assert_eq!(
        detect_shipping_provider("9270111899223197428490"),
        ShippingProvider::Ups
    );
}

#[test]
fn test_live_typing_hints() {
    // Partial input while the operator is still typing a USPS number
    let typed = "9400111899223197428490";
    let hints: Vec<_> = (1..=typed.len())
        .filter_map(|n| typed.get(..n))
        .map(detect_shipping_provider)
        .collect();

    assert_eq!(hints.first(), Some(&ShippingProvider::Other));
    assert_eq!(hints.get(8), Some(&ShippingProvider::Ups));
    assert_eq!(hints.last(), Some(&ShippingProvider::Usps));
}

#[test]
fn test_invalid_input_still_detects() {
    assert_eq!(
        detect_shipping_provider("not-a-tracking-number"),
        ShippingProvider::Other
    );
    assert_eq!(detect_shipping_provider(""), ShippingProvider::Other);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_short_inputs_are_too_short() {
    for input in ["1", "12", "123", "1234", "  1234  ", "AB CD"] {
        let result = validate_tracking_number(input);
        assert!(!result.is_valid, "{input:?} should be invalid");
        assert_eq!(
            result.error.as_deref(),
            Some("Tracking number is too short"),
            "{input:?}"
        );
    }
}

#[test]
fn test_long_inputs_are_too_long() {
    for len in [31, 40, 100] {
        let result = validate_tracking_number(&"7".repeat(len));
        assert_eq!(result.error.as_deref(), Some("Tracking number is too long"));
    }
}

#[test]
fn test_non_alphanumeric_is_rejected() {
    for input in ["AB-12345", "1Z999.AA1", "12345/678", "ABCDE_FGH"] {
        let result = validate_tracking_number(input);
        assert_eq!(
            result.error.as_deref(),
            Some("Tracking number contains invalid characters"),
            "{input:?}"
        );
    }
}

#[test]
fn test_sample_numbers_are_valid() {
    for (number, _) in SAMPLE_NUMBERS {
        assert!(validate_tracking_number(number).is_valid, "{number}");
    }
}

// =============================================================================
// Link and Label Tests
// =============================================================================

#[test]
fn test_ups_link_strips_spacing() {
    let url = generate_tracking_url("1Z 999 AA1 0123456784", ShippingProvider::Ups);
    assert!(url.contains("ups.com"));
    assert!(url.contains("1Z999AA10123456784"));
    assert!(!url.contains(' '));
}

#[test]
fn test_every_provider_has_a_link_and_label() {
    for provider in ShippingProvider::ALL {
        let url = generate_tracking_url("EA123456789US", provider);
        assert!(url.starts_with("https://"), "{provider}");
        assert!(!get_provider_display_name(provider).is_empty());
    }
    assert_eq!(get_provider_display_name(ShippingProvider::Fedex), "FedEx");
    assert_eq!(get_provider_display_name(ShippingProvider::Other), "Other");
}

#[test]
fn test_unknown_carrier_links_to_search() {
    let url = generate_tracking_url("ABCDEFGH", ShippingProvider::Other);
    assert_eq!(url, "https://www.google.com/search?q=ABCDEFGH%20tracking");
}

// =============================================================================
// Parse Tests
// =============================================================================

#[test]
fn test_parse_empty_is_required_error() {
    let err = parse_tracking_number("").unwrap_err();
    assert_eq!(err, TrackingNumberError::Required);
    assert_eq!(err.to_string(), "Tracking number is required");
}

#[test]
fn test_parse_matches_individual_operations() {
    for (number, _) in SAMPLE_NUMBERS {
        let info = parse_tracking_number(number).expect("sample numbers are valid");
        assert_eq!(info.provider, detect_shipping_provider(number));
        assert_eq!(
            info.tracking_url,
            generate_tracking_url(number, info.provider)
        );
        assert_eq!(info.tracking_number, *number);
    }
}

#[test]
fn test_parse_error_matches_validation_message() {
    let long = "9".repeat(31);
    for input in ["", "abc", "AB-12345", long.as_str()] {
        let message = validate_tracking_number(input).error;
        let err = parse_tracking_number(input).expect_err("input is invalid");
        assert_eq!(Some(err.to_string()), message);
    }
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_ups_1z_display() {
    assert_eq!(
        format_tracking_number("1Z999AA10123456784", ShippingProvider::Ups),
        "1Z 999A A101 2345 6784"
    );
}

#[test]
fn test_generic_display_groups() {
    assert_eq!(
        format_tracking_number("9400 111 899 223 197 428 490", ShippingProvider::Usps),
        "9400 1118 9922 3197 4284 90"
    );
    assert_eq!(
        format_tracking_number("EA123456789US", ShippingProvider::Other),
        "EA12 3456 789U S"
    );
}
