//! Postal code geolocation and distance queries.

use std::sync::Arc;

use crate::cache::{RawTableCache, UniqueTableCache};
use crate::config::GeoConfig;
use crate::country::{Country, UnknownCountry};
use crate::distance::{Coordinate, haversine_km};
use crate::error::{GeoError, LookupError};
use crate::normalize::normalize;
use crate::source::{HttpTransport, Transport};
use crate::table::{RawTable, UniqueTable};

/// Resolves postal codes to coordinates and measures distances between them.
///
/// Each engine owns its own in-memory table map; two engines never share
/// loaded tables, though they may share a storage directory.
///
/// # Example
///
/// ```no_run
/// use postcode_distance::GeoDistanceEngine;
///
/// let engine = GeoDistanceEngine::new(false)?;
/// let km = engine.query_postal_code("10001", "US", "94105", "US")?;
/// println!("{km:.1} km");
/// # Ok::<(), postcode_distance::GeoError>(())
/// ```
#[derive(Debug)]
pub struct GeoDistanceEngine<T = HttpTransport> {
    tables: UniqueTableCache<T>,
}

impl GeoDistanceEngine<HttpTransport> {
    /// Create an engine configured from the environment.
    ///
    /// With `force_download`, every country is downloaded again the first
    /// time it is used, ignoring files already on disk.
    pub fn new(force_download: bool) -> Result<Self, GeoError> {
        Self::with_config(GeoConfig::from_env().with_force_download(force_download))
    }

    /// Create an engine downloading over HTTP with the given config.
    pub fn with_config(config: GeoConfig) -> Result<Self, GeoError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> GeoDistanceEngine<T> {
    /// Create an engine over a custom transport.
    pub fn with_transport(config: GeoConfig, transport: T) -> Self {
        Self {
            tables: UniqueTableCache::new(RawTableCache::new(config, transport)),
        }
    }

    pub fn config(&self) -> &GeoConfig {
        self.tables.config()
    }

    pub fn force_download(&self) -> bool {
        self.config().force_download
    }

    /// The deduplicated table for a country, or `None` if the country is
    /// not supported.
    pub fn unique_table(&self, country: &str) -> Result<Option<Arc<UniqueTable>>, GeoError> {
        self.tables.get(country)
    }

    /// The raw table for a country.
    pub fn raw_table(&self, country: &str) -> Result<RawTable, GeoError> {
        let country = Country::parse(country).map_err(LookupError::from)?;
        self.tables.raw().get(country)
    }

    /// Get the (latitude, longitude) of a postal code.
    ///
    /// Fails with [`LookupError`] if the country is unknown, the code is not
    /// in the country's table, or the row has no coordinates.
    pub fn get_geolocation(
        &self,
        code: impl ToString,
        country: &str,
    ) -> Result<Coordinate, GeoError> {
        let code = normalize(code, country);
        let table = self
            .tables
            .get(country)?
            .ok_or_else(|| LookupError::from(UnknownCountry(country.trim().to_uppercase())))?;

        let country = country.trim().to_uppercase();
        let row = table
            .get(&code)
            .ok_or_else(|| LookupError::PostalCodeNotFound {
                code: code.clone(),
                country: country.clone(),
            })?;

        let coordinate = row
            .coordinate()
            .ok_or(LookupError::MissingCoordinates { code, country })?;

        Ok(coordinate)
    }

    /// Distance in kilometres between two postal codes.
    ///
    /// Identical (code, country) pairs give 0 without any lookup, even when
    /// the code doesn't exist. Otherwise both codes must resolve.
    pub fn query_postal_code(
        &self,
        code_x: impl ToString,
        country_x: &str,
        code_y: impl ToString,
        country_y: &str,
    ) -> Result<f64, GeoError> {
        let code_x = code_x.to_string();
        let code_y = code_y.to_string();

        if code_x == code_y && country_x == country_y {
            return Ok(0.0);
        }

        let x = self.get_geolocation(code_x, country_x)?;
        let y = self.get_geolocation(code_y, country_y)?;

        Ok(self.query_geolocation(x, y))
    }

    /// Distance in kilometres between two coordinates.
    pub fn query_geolocation(&self, x: Coordinate, y: Coordinate) -> f64 {
        if x == y { 0.0 } else { haversine_km(x, y) }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
