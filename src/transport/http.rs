//! HTTP GET transport and the injectable transport seam.
//!
//! Every command is one HTTP round trip: open a connection, GET the command
//! path, read the complete body, close. The [`Transport`] trait is the seam
//! the client talks through, so tests substitute a fake transport without
//! process-wide side effects.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HOST;
use tracing::{debug, trace};

use crate::error::Result;

// ============================================================================
// Endpoint
// ============================================================================

/// Remote server address: host plus port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Server hostname.
    host: String,
    /// Server port.
    port: u16,
}

impl Endpoint {
    /// Creates an endpoint from host and port.
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the hostname.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[inline]
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns `host:port`.
    ///
    /// The port is always included, even when it matches the scheme
    /// default; the `Host` header is sent in exactly this form.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Transport over which command paths are exchanged for response bodies.
///
/// Implementations issue a single GET per call and resolve with the
/// complete body; no partial or streaming delivery. Calls are independent:
/// two in-flight requests may complete in any order.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET for `path` against `endpoint`.
    ///
    /// Returns the full response body, UTF-8 decoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on connection,
    /// DNS, socket, or timeout failure.
    async fn get(&self, endpoint: &Endpoint, path: &str) -> Result<String>;
}

// ============================================================================
// HttpTransport
// ============================================================================

/// Default transport: one fresh HTTP connection per command.
///
/// No connection reuse, no pipelining, no retry. Without a configured
/// timeout a hung server stalls the command future indefinitely.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport with no timeout.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that fails requests after `timeout`.
    #[inline]
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Returns the configured timeout, if any.
    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &Endpoint, path: &str) -> Result<String> {
        // Fresh client per command keeps every round trip on its own
        // connection.
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let url = format!("http://{}{}", endpoint.authority(), path);
        trace!(%url, "GET");

        let response = client
            .get(&url)
            .header(HOST, endpoint.authority())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, len = body.len(), "response received");

        Ok(body)
    }
}

// ============================================================================
// Tests
// ============================================================================
