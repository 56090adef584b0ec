//! Tracking number validation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a tracking number.
///
/// The `Display` strings are shown to operators verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingNumberError {
    /// The input is empty or only whitespace.
    #[error("Tracking number is required")]
    Required,
    /// Fewer than [`TrackingNumber::MIN_LENGTH`] characters once whitespace is removed.
    #[error("Tracking number is too short")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// More than [`TrackingNumber::MAX_LENGTH`] characters once whitespace is removed.
    #[error("Tracking number is too long")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Contains something other than ASCII letters and digits.
    #[error("Tracking number contains invalid characters")]
    InvalidCharacters,
}

/// Whitespace for tracking input: `char::is_whitespace` plus the byte order mark.
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Remove every whitespace character, including interior ones.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !is_blank(*c)).collect()
}

/// A syntactically valid tracking number.
///
/// Holds the input with surrounding whitespace trimmed. Interior spacing and
/// casing are kept as entered so the operator sees what they typed.
///
/// ## Constraints
///
/// - Not empty after trimming
/// - 5-30 characters once all whitespace is removed
/// - Only ASCII letters and digits (besides whitespace)
///
/// These are carrier-agnostic; see [`detect_shipping_provider`](crate::detect_shipping_provider)
/// for carrier rules.
///
/// ## Examples
///
/// ```
/// use crystal_shipping_core::TrackingNumber;
///
/// assert!(TrackingNumber::parse("1Z 999 AA1 0123456784").is_ok());
///
/// assert!(TrackingNumber::parse("").is_err());
/// assert!(TrackingNumber::parse("AB12").is_err());
/// assert!(TrackingNumber::parse("AB-12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Minimum length with whitespace removed.
    pub const MIN_LENGTH: usize = 5;

    /// Maximum length with whitespace removed.
    pub const MAX_LENGTH: usize = 30;

    /// Parse a `TrackingNumber` from operator input.
    ///
    /// # Errors
    ///
    /// Checks run in order and stop at the first failure:
    /// - [`TrackingNumberError::Required`] if the trimmed input is empty
    /// - [`TrackingNumberError::TooShort`] if fewer than 5 characters remain
    /// - [`TrackingNumberError::TooLong`] if more than 30 characters remain
    /// - [`TrackingNumberError::InvalidCharacters`] on any non-alphanumeric character
    pub fn parse(s: &str) -> Result<Self, TrackingNumberError> {
        let trimmed = s.trim_matches(is_blank);
        if trimmed.is_empty() {
            return Err(TrackingNumberError::Required);
        }

        let cleaned = strip_whitespace(trimmed);
        let len = cleaned.chars().count();

        if len < Self::MIN_LENGTH {
            return Err(TrackingNumberError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if len > Self::MAX_LENGTH {
            return Err(TrackingNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TrackingNumberError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed tracking number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number with whitespace removed, casing untouched.
    #[must_use]
    pub fn compact(&self) -> String {
        strip_whitespace(&self.0)
    }

    /// Consumes the `TrackingNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for TrackingNumber {
    type Err = TrackingNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of [`validate_tracking_number`].
///
/// Validation failures are data, not errors: `error` carries the message
/// to show the operator when `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the number passed every check.
    pub is_valid: bool,
    /// Operator-facing message for the first failed check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing result carrying the error's message.
    #[must_use]
    pub fn invalid(error: &TrackingNumberError) -> Self {
        Self {
            is_valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, TrackingNumberError>> for ValidationResult {
    fn from(result: Result<T, TrackingNumberError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(&e),
        }
    }
}

/// Check that a tracking number is well-formed, independent of carrier.
///
/// ```
/// use crystal_shipping_core::validate_tracking_number;
///
/// let result = validate_tracking_number("AB-12345");
/// assert!(!result.is_valid);
/// assert_eq!(
///     result.error.as_deref(),
///     Some("Tracking number contains invalid characters")
/// );
/// ```
#[must_use]
pub fn validate_tracking_number(tracking_number: &str) -> ValidationResult {
    TrackingNumber::parse(tracking_number).into()
}
