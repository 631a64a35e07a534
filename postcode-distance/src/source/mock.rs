//! In-memory transport for offline use and testing.
//!
//! Serves pre-registered bodies by URL and records every request, so callers
//! can check whether a download actually happened.

use std::collections::HashMap;
use std::sync::Mutex;

use super::client::Transport;
use super::error::FetchError;

/// Transport that serves bodies from memory.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Debug, Default)]
pub struct StaticTransport {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StaticTransport {
    /// Create a transport with no registered URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body for a URL.
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    /// All URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Transport for StaticTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());

        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Build an in-memory zip archive from `(name, content)` pairs.
#[cfg(test)]
pub(crate) fn zip_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
