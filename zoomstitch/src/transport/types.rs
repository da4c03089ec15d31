//! Transport types and traits

use thiserror::Error;

/// Errors that can occur while talking to the remote image server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Request could not be sent or the response body could not be read
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status code
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

/// Trait for HTTP fetch operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(url)
    }
}
