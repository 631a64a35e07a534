//! Download error types.

/// Errors that can occur while fetching a country's postal data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The download URL list is unusable
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Request could not be sent or the body could not be read
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Zip archive was unreadable or lacked the country member
    #[error("archive error for {url}: {message}")]
    Archive { url: String, message: String },

    /// Every configured URL failed; holds the final attempt's error
    #[error("provided download URLs failed after {attempts} attempts: {source}")]
    Download {
        attempts: usize,
        #[source]
        source: Box<FetchError>,
    },
}
