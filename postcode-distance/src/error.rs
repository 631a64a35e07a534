//! Error types for lookups and the data pipeline.

use crate::country::UnknownCountry;
use crate::source::FetchError;

/// A postal code could not be resolved to a coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// Country is not in the catalog
    #[error(transparent)]
    UnknownCountry(#[from] UnknownCountry),

    /// Country's table has no row for the code
    #[error("postal code {code:?} not found for country {country}")]
    PostalCodeNotFound { code: String, country: String },

    /// Row exists but its latitude or longitude is empty
    #[error("postal code {code:?} in {country} has no coordinates")]
    MissingCoordinates { code: String, country: String },
}

/// Errors returned by the engine and its caches.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// Postal data could not be downloaded
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Postal code lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Reading or writing a cache file failed
    #[error("cache error: {message}")]
    Cache { message: String },

    /// Tabular data was malformed
    #[error("parse error: {message}")]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LookupError::PostalCodeNotFound {
            code: "00000".into(),
            country: "US".into(),
        };
        assert_eq!(err.to_string(), "postal code \"00000\" not found for country US");

        let err: GeoError = LookupError::UnknownCountry(UnknownCountry("ZZ".into())).into();
        assert_eq!(err.to_string(), "country=ZZ is not a known country code");

        let err = GeoError::Cache {
            message: "failed to write /data/US.txt: permission denied".into(),
        };
        assert!(err.to_string().starts_with("cache error: "));
    }
}
