//! Deduplicated per-country tables, cached on disk and in memory.

use std::fmt;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info, warn};

use crate::config::GeoConfig;
use crate::country::Country;
use crate::error::GeoError;
use crate::source::Transport;
use crate::table::{UniqueTable, deduplicate, read_cache, write_cache};

use super::raw::RawTableCache;

/// Unique tables, keyed by country.
///
/// Lookup order is: in-memory map, then `{COUNTRY}-index.txt`, then the
/// raw table. Once a country is in memory it stays there for the lifetime
/// of this cache, whatever happens to the files on disk.
pub struct UniqueTableCache<T> {
    raw: RawTableCache<T>,
    /// No capacity or TTL, so entries are never evicted.
    tables: Cache<Country, Arc<UniqueTable>>,
}

impl<T: Transport> UniqueTableCache<T> {
    /// Create a cache on top of a raw table cache.
    pub fn new(raw: RawTableCache<T>) -> Self {
        Self {
            raw,
            tables: Cache::builder().build(),
        }
    }

    /// Get the unique table for a country code.
    ///
    /// The code is case-insensitive. Returns `Ok(None)` for codes outside
    /// the catalog; that case is logged, not raised.
    pub fn get(&self, country: &str) -> Result<Option<Arc<UniqueTable>>, GeoError> {
        let country = match Country::parse(country) {
            Ok(country) => country,
            Err(e) => {
                info!("{}. See the README for a list of supported countries", e);
                return Ok(None);
            }
        };

        self.load(country).map(Some)
    }

    /// Get the unique table for a known country.
    pub fn load(&self, country: Country) -> Result<Arc<UniqueTable>, GeoError> {
        if let Some(table) = self.tables.get(&country) {
            debug!(country = %country, "unique table memory hit");
            return Ok(table);
        }

        if country.has_legacy_codes() {
            warn!(
                "The Argentina data file contains 4-digit postal codes which were \
                 replaced with a new system in 1999."
            );
        }

        let config = self.raw.config();
        let path = config.unique_path(country);

        let cached = if !config.force_download && path.exists() {
            match read_cache(&path) {
                Ok(rows) => {
                    debug!(country = %country, path = %path.display(), "unique table cache hit");
                    Some(UniqueTable::new(rows))
                }
                Err(e) => {
                    warn!(country = %country, error = %e, "ignoring unreadable unique table cache");
                    None
                }
            }
        } else {
            None
        };

        let table = if let Some(table) = cached {
            table
        } else {
            let raw = self.raw.get(country)?;
            let table = deduplicate(&raw);
            write_cache(&path, table.rows())?;
            info!(
                country = %country,
                raw_rows = raw.len(),
                unique_rows = table.len(),
                path = %path.display(),
                "saved unique table"
            );
            table
        };

        let table = Arc::new(table);
        self.tables.insert(country, table.clone());
        Ok(table)
    }

    /// Whether a country's table is already held in memory.
    pub fn is_loaded(&self, country: Country) -> bool {
        self.tables.contains_key(&country)
    }

    /// The underlying raw table cache.
    pub fn raw(&self) -> &RawTableCache<T> {
        &self.raw
    }

    pub fn config(&self) -> &GeoConfig {
        self.raw.config()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueTableCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueTableCache")
            .field("raw", &self.raw)
            .field("loaded", &self.tables.entry_count())
            .finish()
    }
}
