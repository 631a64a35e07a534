//! Country codes with postal data available from the GeoNames export.

use std::fmt;

/// Every country the postal-code dataset covers.
static CATALOG: [&str; 83] = [
    "AD", "AR", "AS", "AT", "AU", "AX", "BD", "BE", "BG", "BM", "BR", "BY", "CA", "CH", "CO", "CR",
    "CZ", "DE", "DK", "DO", "DZ", "ES", "FI", "FO", "FR", "GB", "GF", "GG", "GL", "GP", "GT", "GU",
    "HR", "HU", "IE", "IM", "IN", "IS", "IT", "JE", "JP", "LI", "LK", "LT", "LU", "LV", "MC", "MD",
    "MH", "MK", "MP", "MQ", "MT", "MX", "MY", "NC", "NL", "NO", "NZ", "PH", "PK", "PL", "PM", "PR",
    "PT", "RE", "RO", "RU", "SE", "SI", "SJ", "SK", "SM", "TH", "TR", "UA", "US", "UY", "VA", "VI",
    "WF", "YT", "ZA",
];

/// Error returned when a code is not in the country catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("country={0} is not a known country code")]
pub struct UnknownCountry(pub String);

/// A supported two-letter country code.
///
/// Any `Country` value is a member of the catalog by construction, so the
/// storage paths and download URLs derived from it are always well formed.
///
/// # Examples
///
/// ```
/// use postcode_distance::country::Country;
///
/// let us = Country::parse("us").unwrap();
/// assert_eq!(us.as_str(), "US");
///
/// assert!(Country::parse("ZZ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Country(&'static str);

impl Country {
    /// Parse a country code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownCountry> {
        let upper = s.trim().to_uppercase();
        CATALOG
            .iter()
            .copied()
            .find(|code| *code == upper)
            .map(Country)
            .ok_or(UnknownCountry(upper))
    }

    /// Returns the uppercase country code.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// All supported countries, in alphabetical order.
    pub fn all() -> impl Iterator<Item = Country> {
        CATALOG.iter().copied().map(Country)
    }

    /// Whether the dataset for this country carries codes that are no
    /// longer in use.
    ///
    /// Argentina replaced its 4-digit postal codes in 1999, but the export
    /// still ships the old ones.
    pub fn has_legacy_codes(&self) -> bool {
        self.0 == "AR"
    }
}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country({})", self.0)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
