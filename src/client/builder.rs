//! Builder pattern for client configuration.
//!
//! Provides a fluent API for configuring and creating [`Client`] instances.
//!
//! # Example
//!
//! ```
//! use selenium_rc::Client;
//!
//! let client = Client::builder()
//!     .host("localhost")
//!     .port(4444)
//!     .browser("firefox")
//!     .url("http://example.com")
//!     .build();
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::transport::{HttpTransport, Transport};

use super::config::ClientConfig;
use super::core::Client;

// ============================================================================
// ClientBuilder
// ============================================================================

/// Builder for configuring a [`Client`] instance.
///
/// Use [`Client::builder()`] to create a new builder. Construction performs
/// no I/O and no required-field validation; an incomplete configuration
/// fails at [`start_session`](Client::start_session) instead.
#[derive(Clone, Default)]
pub struct ClientBuilder {
    /// Accumulated configuration.
    config: ClientConfig,
    /// Transport override for tests or custom stacks.
    transport: Option<Arc<dyn Transport>>,
}

// ============================================================================
// ClientBuilder Implementation
// ============================================================================

impl ClientBuilder {
    /// Creates a new builder with default host and port.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server hostname (default `localhost`).
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the server port (default `4444`).
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the target browser.
    ///
    /// Normalized to the `*launcher` convention; see
    /// [`ClientConfig::with_browser`].
    #[inline]
    #[must_use]
    pub fn browser(mut self, browser: impl Into<String>) -> Self {
        self.config = self.config.with_browser(browser);
        self
    }

    /// Sets the session start page.
    #[inline]
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_url(url);
        self
    }

    /// Substitutes the transport the client issues commands through.
    ///
    /// Defaults to [`HttpTransport`] with no timeout.
    #[inline]
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    #[must_use]
    pub fn build(self) -> Client {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(HttpTransport::new()));
        Client::with_transport(self.config, transport)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let client = ClientBuilder::new()
            .host("grid.internal")
            .port(5555)
            .browser("firefox")
            .url("http://example.com")
            .build();

        let config = client.config();
        assert_eq!(config.host, "grid.internal");
        assert_eq!(config.port, 5555);
        assert_eq!(config.browser.as_deref(), Some("*firefox"));
        assert_eq!(config.url.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_build_succeeds_without_required_fields() {
        // Missing browser/url is a session-time failure, not a build error.
        let client = ClientBuilder::new().build();
        assert!(client.config().browser.is_none());
        assert!(client.config().url.is_none());
    }

    #[test]
    fn test_defaults() {
        let client = ClientBuilder::new().build();
        assert_eq!(client.config().host, "localhost");
        assert_eq!(client.config().port, 4444);
    }

    #[test]
    fn test_custom_transport() {
        let transport = Arc::new(HttpTransport::with_timeout(
            std::time::Duration::from_secs(10),
        ));
        let client = ClientBuilder::new().transport(transport).build();
        assert!(client.session_id().is_none());
    }
}
