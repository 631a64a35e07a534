//! HTTP transport for postal data downloads.

use std::sync::Arc;
use std::time::Duration;

use super::error::FetchError;

/// Something that can retrieve the body of a URL.
///
/// Implementations must return the complete body and release every
/// connection or stream before returning, whether or not they succeed.
pub trait Transport {
    /// Fetch `url`, failing on network errors and non-success statuses.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Configuration {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport_error = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.http.get(url).send().map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_timeout() {
        assert!(HttpTransport::new(Duration::from_secs(1)).is_ok());
    }
}
