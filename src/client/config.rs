//! Client connection configuration.
//!
//! Immutable parameters for one remote session: server address, target
//! browser, and the page the session starts on.
//!
//! # Example
//!
//! ```
//! use selenium_rc::ClientConfig;
//!
//! let config = ClientConfig::new()
//!     .with_host("grid.internal")
//!     .with_port(4444)
//!     .with_browser("firefox")
//!     .with_url("http://example.com");
//!
//! assert_eq!(config.browser.as_deref(), Some("*firefox"));
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};
use crate::transport::Endpoint;

// ============================================================================
// Constants
// ============================================================================

/// Default server hostname.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port.
pub const DEFAULT_PORT: u16 = 4444;

// ============================================================================
// ClientConfig
// ============================================================================

/// Connection parameters for a [`Client`](crate::Client).
///
/// `host` and `port` have usable defaults; `browser` and `url` have none
/// and are required before a session can be started. Leaving them unset
/// produces a config that fails at
/// [`start_session`](crate::Client::start_session), not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server hostname.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Target browser launcher, normalized to a `*` prefix.
    pub browser: Option<String>,

    /// Start page for the session.
    pub url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            browser: None,
            url: None,
        }
    }
}

// ============================================================================
// Constructors & Builder Methods
// ============================================================================

impl ClientConfig {
    /// Creates a config with default host and port and no browser or URL.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server hostname.
    #[inline]
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the server port.
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the target browser, normalizing it to the server's custom
    /// launcher convention.
    ///
    /// `firefox` becomes `*firefox`; an already-prefixed `*chrome` is kept
    /// as-is. An empty string skips normalization and is treated as unset
    /// when the session starts.
    #[inline]
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = Some(normalize_browser(browser.into()));
        self
    }

    /// Sets the session start page.
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

// ============================================================================
// Accessors & Validation
// ============================================================================

impl ClientConfig {
    /// Returns the server endpoint.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    /// Checks the session preconditions, returning `(browser, url)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the browser or URL is unset or empty.
    pub fn session_params(&self) -> Result<(&str, &str)> {
        let browser = self
            .browser
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| Error::config("browser required"))?;

        let url = self
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::config("browser url required"))?;

        Ok((browser, url))
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Prefixes `browser` with `*` unless it already starts with one.
///
/// Empty input is returned untouched; the missing browser is reported when
/// the session starts.
fn normalize_browser(browser: String) -> String {
    if browser.is_empty() || browser.starts_with('*') {
        browser
    } else {
        format!("*{browser}")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 4444);
        assert!(config.browser.is_none());
        assert!(config.url.is_none());
    }

    #[test]
    fn test_browser_gains_star_prefix() {
        let config = ClientConfig::new().with_browser("firefox");
        assert_eq!(config.browser.as_deref(), Some("*firefox"));
    }

    #[test]
    fn test_prefixed_browser_unchanged() {
        let config = ClientConfig::new().with_browser("*chrome");
        assert_eq!(config.browser.as_deref(), Some("*chrome"));
    }

    #[test]
    fn test_empty_browser_skips_normalization() {
        let config = ClientConfig::new().with_browser("");
        assert_eq!(config.browser.as_deref(), Some(""));
    }

    #[test]
    fn test_session_params_ok() {
        let config = ClientConfig::new()
            .with_browser("firefox")
            .with_url("http://example.com");

        let (browser, url) = config.session_params().expect("complete config");
        assert_eq!(browser, "*firefox");
        assert_eq!(url, "http://example.com");
    }

    #[test]
    fn test_session_params_requires_browser() {
        let config = ClientConfig::new().with_url("http://example.com");
        let err = config.session_params().unwrap_err();

        assert!(err.is_config_error());
        assert!(err.to_string().contains("browser required"));
    }

    #[test]
    fn test_session_params_requires_url() {
        let config = ClientConfig::new().with_browser("firefox");
        let err = config.session_params().unwrap_err();

        assert!(err.is_config_error());
        assert!(err.to_string().contains("url required"));
    }

    #[test]
    fn test_empty_browser_rejected_at_session_time() {
        let config = ClientConfig::new()
            .with_browser("")
            .with_url("http://example.com");
        assert!(config.session_params().is_err());
    }

    #[test]
    fn test_endpoint() {
        let config = ClientConfig::new().with_host("grid.internal").with_port(5555);
        assert_eq!(config.endpoint(), Endpoint::new("grid.internal", 5555));
    }
}
