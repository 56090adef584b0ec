//! Single tracking number commands.
//!
//! # Usage
//!
//! ```bash
//! cs-cli detect 1Z999AA10123456784
//! cs-cli validate "9400 1118 9922 3197 4284 90"
//! cs-cli parse 1Z999AA10123456784 --json
//! cs-cli url 123456789012 --provider fedex
//! cs-cli format 1Z999AA10123456784
//! ```

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, warn};

use crystal_shipping_core::{
    ShippingProvider, TrackingInfo, TrackingNumber, ValidationResult, format_tracking_number,
    generate_tracking_url, matching_rule, parse_tracking_number,
};

use super::resolve_provider;
use crate::error::CliError;
use crate::output::Output;

#[derive(Debug, Serialize)]
struct Detection<'a> {
    tracking_number: &'a str,
    provider: ShippingProvider,
    rule: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ParsedNumber {
    #[serde(flatten)]
    info: TrackingInfo,
    display_name: &'static str,
    formatted: String,
}

#[derive(Debug, Serialize)]
struct Rendered<'a> {
    provider: ShippingProvider,
    value: &'a str,
}

/// Print the provider a tracking number belongs to.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn detect<W: Write>(tracking_number: &str, out: &mut Output<W>) -> Result<(), CliError> {
    let rule = matching_rule(tracking_number);
    let provider = rule.map_or(ShippingProvider::Other, |r| r.provider);
    debug!(
        rule = rule.map(|r| r.name),
        provider = %provider,
        "Detected shipping provider"
    );

    out.emit(
        provider.as_str(),
        &Detection {
            tracking_number,
            provider,
            rule: rule.map(|r| r.name),
        },
    )
}

/// Print whether a tracking number is well-formed.
///
/// # Errors
///
/// Returns [`CliError::InvalidTrackingNumber`] after printing the result
/// when the number is invalid, so the process exits non-zero.
pub fn validate<W: Write>(tracking_number: &str, out: &mut Output<W>) -> Result<(), CliError> {
    match TrackingNumber::parse(tracking_number) {
        Ok(_) => {
            out.emit("valid", &ValidationResult::valid())?;
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Tracking number failed validation");
            out.emit(&format!("invalid: {e}"), &ValidationResult::invalid(&e))?;
            Err(e.into())
        }
    }
}

/// Validate, classify and link a tracking number.
///
/// # Errors
///
/// Returns an error if the number is invalid or writing output fails.
pub fn parse<W: Write>(tracking_number: &str, out: &mut Output<W>) -> Result<(), CliError> {
    let info = parse_tracking_number(tracking_number)?;
    info!(provider = %info.provider, "Parsed tracking number");

    let parsed = ParsedNumber {
        display_name: info.provider_display_name(),
        formatted: info.formatted_number(),
        info,
    };
    let text = format!(
        "Tracking number: {}\nProvider:        {} ({})\nFormatted:       {}\nTracking URL:    {}",
        parsed.info.tracking_number,
        parsed.display_name,
        parsed.info.provider,
        parsed.formatted,
        parsed.info.tracking_url,
    );
    out.emit(&text, &parsed)
}

/// Print the tracking URL, detecting the provider unless one is given.
///
/// # Errors
///
/// Returns an error if `provider` is unknown or writing output fails.
pub fn url<W: Write>(
    tracking_number: &str,
    provider: Option<&str>,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let provider = resolve_provider(tracking_number, provider)?;
    let url = generate_tracking_url(tracking_number, provider);
    out.emit(
        &url,
        &Rendered {
            provider,
            value: &url,
        },
    )
}

/// Print the display form of a tracking number.
///
/// # Errors
///
/// Returns an error if `provider` is unknown or writing output fails.
pub fn format<W: Write>(
    tracking_number: &str,
    provider: Option<&str>,
    out: &mut Output<W>,
) -> Result<(), CliError> {
    let provider = resolve_provider(tracking_number, provider)?;
    let formatted = format_tracking_number(tracking_number, provider);
    out.emit(
        &formatted,
        &Rendered {
            provider,
            value: &formatted,
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::OutputFormat;

    use super::*;

    fn run<F>(format: OutputFormat, f: F) -> (Result<(), CliError>, String)
    where
        F: FnOnce(&mut Output<Vec<u8>>) -> Result<(), CliError>,
    {
        let mut out = Output::new(format, Vec::new());
        let result = f(&mut out);
        (result, String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn test_detect_text() {
        let (result, text) = run(OutputFormat::Text, |out| {
            detect("9270111899223197428490", out)
        });
        assert!(result.is_ok());
        assert_eq!(text, "ups\n");
    }

    #[test]
    fn test_detect_json_includes_rule() {
        let (_, text) = run(OutputFormat::Json, |out| detect("EA123456789US", out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["provider"], "usps");
        assert_eq!(value["rule"], "usps-international");
    }

    #[test]
    fn test_detect_other_has_no_rule() {
        let (_, text) = run(OutputFormat::Json, |out| detect("hello", out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["provider"], "other");
        assert!(value["rule"].is_null());
    }

    #[test]
    fn test_validate_invalid_prints_then_fails() {
        let (result, text) = run(OutputFormat::Text, |out| validate("AB-12345", out));
        assert!(matches!(result, Err(CliError::InvalidTrackingNumber(_))));
        assert_eq!(text, "invalid: Tracking number contains invalid characters\n");
    }

    #[test]
    fn test_validate_valid_json() {
        let (result, text) = run(OutputFormat::Json, |out| validate("T1234567890", out));
        assert!(result.is_ok());
        assert_eq!(text, "{\"is_valid\":true}\n");
    }

    #[test]
    fn test_parse_json() {
        let (result, text) = run(OutputFormat::Json, |out| parse("1Z999AA10123456784", out));
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tracking_number"], "1Z999AA10123456784");
        assert_eq!(value["provider"], "ups");
        assert_eq!(value["display_name"], "UPS");
        assert_eq!(value["formatted"], "1Z 999A A101 2345 6784");
    }

    #[test]
    fn test_parse_empty_fails() {
        let (result, text) = run(OutputFormat::Text, |out| parse("   ", out));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Tracking number is required");
        assert!(text.is_empty());
    }

    #[test]
    fn test_url_with_explicit_provider() {
        let (_, text) = run(OutputFormat::Text, |out| {
            url("123456789012", Some("fedex"), out)
        });
        assert_eq!(text, "https://www.fedex.com/fedextrack/?trknbr=123456789012\n");
    }

    #[test]
    fn test_format_detects_provider() {
        let (_, text) = run(OutputFormat::Text, |out| {
            format("1Z999AA10123456784", None, out)
        });
        assert_eq!(text, "1Z 999A A101 2345 6784\n");
    }
}
