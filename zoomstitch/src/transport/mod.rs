//! HTTP transport abstraction
//!
//! This module provides the transport capability used for every network
//! read: descriptor retrieval and tile fetches. The [`HttpClient`] trait is
//! injected into the operations that need it, so tests can substitute a
//! deterministic fake transport.

mod http;
mod types;

pub use http::ReqwestClient;
pub use types::{HttpClient, TransportError};

#[cfg(test)]
pub use http::tests::MockHttpClient;
