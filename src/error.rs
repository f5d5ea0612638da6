//! Error types for the Selenium RC client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use selenium_rc::{Client, Result};
//!
//! async fn example(client: &Client) -> Result<()> {
//!     let sid = client.start_session().await?;
//!     println!("session: {sid}");
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variant | Detected |
//! |----------|---------|----------|
//! | Configuration | [`Error::Config`] | Before any network call |
//! | Transport | [`Error::Transport`] | Connection/DNS/socket/timeout failure |
//! | Command | [`Error::Command`] | Server replied with the `ERROR` convention |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging. Errors are always
/// surfaced to the immediate caller; nothing is retried or swallowed.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Returned when a session is started with an incomplete configuration
    /// (missing browser or start URL). Detected synchronously, before any
    /// network attempt.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Command rejected by the remote server.
    ///
    /// Returned when the server replies with the `ERROR` convention.
    /// The message carries the command name, its arguments, and the
    /// server-provided text.
    #[error("{message}")]
    Command {
        /// Formatted as `name(arg1, arg2): server message`.
        message: String,
        /// The unprocessed response body, kept for inspection.
        raw: String,
    },

    /// Transport failure.
    ///
    /// Connection, DNS, socket, or timeout errors from the underlying HTTP
    /// client, surfaced as-is and never mapped further.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a command error from a formatted message and the raw body.
    #[inline]
    pub fn command(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
            raw: raw.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if the server rejected the command.
    #[inline]
    #[must_use]
    pub fn is_command_error(&self) -> bool {
        matches!(self, Self::Command { .. })
    }

    /// Returns `true` if this is a transport-level failure.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the underlying transport timed out.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns the raw server response body for command errors.
    #[inline]
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Command { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("browser required");
        assert_eq!(err.to_string(), "Configuration error: browser required");
    }

    #[test]
    fn test_command_error_display() {
        let err = Error::command(
            "click(id=foo): Element not found",
            "ERROR: Element not found",
        );
        assert_eq!(err.to_string(), "click(id=foo): Element not found");
    }

    #[test]
    fn test_is_config_error() {
        let config_err = Error::config("url required");
        let command_err = Error::command("open(/): boom", "ERROR: boom");

        assert!(config_err.is_config_error());
        assert!(!command_err.is_config_error());
    }

    #[test]
    fn test_is_command_error() {
        let command_err = Error::command("open(/): boom", "ERROR: boom");
        let config_err = Error::config("test");

        assert!(command_err.is_command_error());
        assert!(!config_err.is_command_error());
    }

    #[test]
    fn test_raw_response() {
        let command_err = Error::command("click(a): nope", "ERROR: nope");
        let config_err = Error::config("test");

        assert_eq!(command_err.raw_response(), Some("ERROR: nope"));
        assert_eq!(config_err.raw_response(), None);
    }

    #[test]
    fn test_non_transport_predicates() {
        let config_err = Error::config("test");
        assert!(!config_err.is_transport_error());
        assert!(!config_err.is_timeout());
    }
}
