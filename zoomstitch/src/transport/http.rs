//! HTTP client implementations

use std::time::Duration;

use super::types::{HttpClient, TransportError};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| TransportError::Http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Mock HTTP client for testing.
    ///
    /// Responses are routed by exact URL; URLs without a registered route
    /// fall back to the default response.
    pub struct MockHttpClient {
        default_response: Result<Vec<u8>, TransportError>,
        routes: HashMap<String, Result<Vec<u8>, TransportError>>,
    }

    impl MockHttpClient {
        /// Creates a mock answering every request with the same response.
        pub fn always(response: Result<Vec<u8>, TransportError>) -> Self {
            Self {
                default_response: response,
                routes: HashMap::new(),
            }
        }

        /// Registers a response for one exact URL.
        pub fn with_route(mut self, url: &str, response: Result<Vec<u8>, TransportError>) -> Self {
            self.routes.insert(url.to_string(), response);
            self
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
            self.routes
                .get(url)
                .unwrap_or(&self.default_response)
                .clone()
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::always(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::always(Err(TransportError::Http("Test error".to_string())));

        let result = mock.get("http://example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_client_routes_by_url() {
        let mock = MockHttpClient::always(Ok(vec![0]))
            .with_route("http://example.com/a", Ok(vec![1]))
            .with_route(
                "http://example.com/b",
                Err(TransportError::Status {
                    status: 500,
                    url: "http://example.com/b".to_string(),
                }),
            );

        assert_eq!(mock.get("http://example.com/a").unwrap(), vec![1]);
        assert!(mock.get("http://example.com/b").is_err());
        assert_eq!(mock.get("http://example.com/other").unwrap(), vec![0]);
    }

    #[test]
    fn test_client_usable_by_reference() {
        fn fetch<C: HttpClient>(client: C) -> Result<Vec<u8>, TransportError> {
            client.get("http://example.com")
        }

        let mock = MockHttpClient::always(Ok(vec![7]));
        assert_eq!(fetch(&mock).unwrap(), vec![7]);
        // The owning mock is still usable after lending it out
        assert_eq!(mock.get("http://example.com").unwrap(), vec![7]);
    }
}
