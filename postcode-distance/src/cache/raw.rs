//! Disk cache for raw per-country tables.

use tracing::{debug, info, warn};

use crate::config::GeoConfig;
use crate::country::Country;
use crate::error::GeoError;
use crate::source::{SourceFetcher, Transport};
use crate::table::{RawTable, parse_source, read_cache, write_cache};

/// Raw tables, read from `{COUNTRY}.txt` or downloaded and saved there.
#[derive(Debug)]
pub struct RawTableCache<T> {
    config: GeoConfig,
    fetcher: SourceFetcher<T>,
}

impl<T: Transport> RawTableCache<T> {
    /// Create a cache downloading through `transport`.
    pub fn new(config: GeoConfig, transport: T) -> Self {
        Self {
            config,
            fetcher: SourceFetcher::new(transport),
        }
    }

    /// Get the raw table for a country.
    ///
    /// Reads the cache file if it exists and forced refresh is off.
    /// Otherwise, or if the file can't be read, downloads the export and
    /// overwrites the cache file.
    pub fn get(&self, country: Country) -> Result<RawTable, GeoError> {
        let path = self.config.raw_path(country);

        if !self.config.force_download && path.exists() {
            match read_cache(&path) {
                Ok(rows) => {
                    debug!(country = %country, path = %path.display(), "raw table cache hit");
                    return Ok(RawTable::new(rows));
                }
                Err(e) => {
                    warn!(country = %country, error = %e, "ignoring unreadable raw table cache");
                }
            }
        }

        let data = self.fetcher.fetch(country, &self.config.download_urls)?;
        let rows = parse_source(&data)?;
        write_cache(&path, &rows)?;
        info!(country = %country, rows = rows.len(), path = %path.display(), "saved raw table");

        Ok(RawTable::new(rows))
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }
}
