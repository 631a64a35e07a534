//! Ordered-fallback download of a country's postal data.

use std::io::{Cursor, Read};

use tracing::{info, warn};
use zip::ZipArchive;

use crate::country::Country;

use super::client::Transport;
use super::error::FetchError;

/// Placeholder substituted with the country code in URL templates.
const COUNTRY_PLACEHOLDER: &str = "{country}";

/// Downloads tab-separated postal data, trying each URL template in turn.
#[derive(Debug, Clone)]
pub struct SourceFetcher<T> {
    transport: T,
}

impl<T: Transport> SourceFetcher<T> {
    /// Create a fetcher over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the raw data for `country`.
    ///
    /// Each template is tried exactly once, in order. A failure on any URL
    /// but the last is logged and the next URL is tried; a failure on the
    /// last URL is returned as [`FetchError::Download`].
    pub fn fetch(&self, country: Country, templates: &[String]) -> Result<Vec<u8>, FetchError> {
        let urls: Vec<String> = templates
            .iter()
            .map(|t| t.replace(COUNTRY_PLACEHOLDER, country.as_str()))
            .collect();

        let Some((last, earlier)) = urls.split_last() else {
            return Err(FetchError::Configuration {
                message: "at least one download URL is required".to_string(),
            });
        };

        for url in earlier {
            match self.fetch_one(url, country) {
                Ok(content) => return Ok(content),
                Err(e) => {
                    warn!(url = %url, error = %e, "download failed, trying next URL");
                }
            }
        }

        self.fetch_one(last, country)
            .map_err(|e| FetchError::Download {
                attempts: urls.len(),
                source: Box::new(e),
            })
    }

    fn fetch_one(&self, url: &str, country: Country) -> Result<Vec<u8>, FetchError> {
        info!(url = %url, "downloading postal data");
        let body = self.transport.get(url)?;

        if url.ends_with(".zip") {
            extract_member(url, body, &format!("{}.txt", country))
        } else {
            Ok(body)
        }
    }
}

/// Read a single named member out of a zip archive.
fn extract_member(url: &str, body: Vec<u8>, member: &str) -> Result<Vec<u8>, FetchError> {
    let archive_error = |message: String| FetchError::Archive {
        url: url.to_string(),
        message,
    };

    let mut archive = ZipArchive::new(Cursor::new(body))
        .map_err(|e| archive_error(format!("failed to open archive: {}", e)))?;
    let mut file = archive
        .by_name(member)
        .map_err(|e| archive_error(format!("failed to open {}: {}", member, e)))?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| archive_error(format!("failed to read {}: {}", member, e)))?;

    Ok(content)
}
