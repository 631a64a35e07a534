//! Storage and download configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::country::Country;

/// Environment variable overriding the storage directory.
pub const DATA_DIR_ENV: &str = "PGEOCODE_DATA_DIR";

/// Directory name used under the home directory when no override is set.
const DEFAULT_DIR_NAME: &str = "pgeocode_data";

/// Download locations, tried in order. `{country}` is replaced by the
/// uppercase country code.
pub const DEFAULT_DOWNLOAD_URLS: [&str; 2] = [
    "https://download.geonames.org/export/zip/{country}.zip",
    "https://symerio.github.io/postal-codes-data/data/geonames/{country}.txt",
];

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for an engine instance.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    /// Directory holding the per-country cache files.
    pub storage_dir: PathBuf,
    /// URL templates containing a `{country}` placeholder.
    pub download_urls: Vec<String>,
    /// Ignore files on disk and download everything again.
    pub force_download: bool,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl GeoConfig {
    /// Create a config storing data under `storage_dir`.
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            download_urls: DEFAULT_DOWNLOAD_URLS.iter().map(|u| u.to_string()).collect(),
            force_download: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a config from the environment.
    ///
    /// Uses `PGEOCODE_DATA_DIR` if set, otherwise `~/pgeocode_data`.
    pub fn from_env() -> Self {
        let dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir().join(DEFAULT_DIR_NAME),
        };
        Self::new(dir)
    }

    /// Set a custom storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Replace the download URL templates.
    pub fn with_download_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.download_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable forced refresh.
    pub fn with_force_download(mut self, force: bool) -> Self {
        self.force_download = force;
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of the raw table cache for a country (`{COUNTRY}.txt`).
    pub fn raw_path(&self, country: Country) -> PathBuf {
        self.storage_dir.join(format!("{}.txt", country))
    }

    /// Path of the deduplicated table cache for a country (`{COUNTRY}-index.txt`).
    pub fn unique_path(&self, country: Country) -> PathBuf {
        self.storage_dir.join(format!("{}-index.txt", country))
    }

    /// The storage directory.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
}
