//! Shipping carrier tags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The carrier that issued a tracking number.
///
/// `Other` is a valid classification, not an error: it means no known
/// carrier pattern matched. Serialized as the lowercase tag stored on
/// order records (`usps`, `ups`, `fedex`, `other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingProvider {
    Usps,
    Ups,
    Fedex,
    #[default]
    Other,
}

impl ShippingProvider {
    /// Every provider, in declaration order.
    pub const ALL: [Self; 4] = [Self::Usps, Self::Ups, Self::Fedex, Self::Other];

    /// The lowercase tag persisted alongside an order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usps => "usps",
            Self::Ups => "ups",
            Self::Fedex => "fedex",
            Self::Other => "other",
        }
    }

    /// Human-readable carrier label.
    ///
    /// ```
    /// use crystal_shipping_core::ShippingProvider;
    ///
    /// assert_eq!(ShippingProvider::Fedex.display_name(), "FedEx");
    /// assert_eq!(ShippingProvider::Other.display_name(), "Other");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Usps => "USPS",
            Self::Ups => "UPS",
            Self::Fedex => "FedEx",
            Self::Other => "Other",
        }
    }

    /// Read a stored tag back, mapping anything unrecognized to `Other`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Other)
    }
}

/// Error returned when strictly parsing an unknown provider tag.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid shipping provider: {0}")]
pub struct UnknownProviderError(pub String);

impl fmt::Display for ShippingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShippingProvider {
    type Err = UnknownProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usps" => Ok(Self::Usps),
            "ups" => Ok(Self::Ups),
            "fedex" => Ok(Self::Fedex),
            "other" => Ok(Self::Other),
            _ => Err(UnknownProviderError(s.to_owned())),
        }
    }
}

/// Free-function form of [`ShippingProvider::display_name`].
#[must_use]
pub const fn get_provider_display_name(provider: ShippingProvider) -> &'static str {
    provider.display_name()
}

// SQLx support (with postgres feature). Stored as TEXT on the order record.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ShippingProvider {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ShippingProvider {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::from_tag(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ShippingProvider {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}
