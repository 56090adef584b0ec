//! Integration tests for Crystal Shipping.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p crystal-shipping-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `tracking_classifier` - Public classifier API end to end
//! - `order_records` - Provider tags as persisted on order records
//!
//! Shared fixtures live here so each test file sees the same sample numbers.

/// Sample tracking numbers with the tag each must classify as.
pub const SAMPLE_NUMBERS: &[(&str, &str)] = &[
    ("9400111899223197428490", "usps"),
    ("9205590164917312751089", "usps"),
    ("EA123456789US", "usps"),
    ("8212345678US", "usps"),
    ("1Z999AA10123456784", "ups"),
    ("9270111899223197428490", "ups"),
    ("PRO12345678", "ups"),
    ("T1234567890", "ups"),
    ("123456789", "ups"),
    ("12345678901234567890", "usps"),
    ("ABCDEFGH", "other"),
];
