//! Response decoding for the plain-text OK/ERROR convention.
//!
//! The server frames every reply as a single UTF-8 text body:
//!
//! | Leading bytes | Outcome | Body handling |
//! |---------------|---------|---------------|
//! | `ERROR` | failure | `ERROR:` marker and following spaces stripped |
//! | `OK` | success | a leading `OK,` literal removed |
//! | anything else | success | body left verbatim |
//!
//! Classification happens exactly once, here, on the complete body; callers
//! receive a tagged [`Result`] and never re-inspect string prefixes.

// ============================================================================
// Imports
// ============================================================================

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::CommandRequest;

// ============================================================================
// CommandResponse
// ============================================================================

/// A successfully decoded command response.
///
/// Holds the processed body. Higher-level helpers interpret it further
/// (session ids, booleans, element text); this type only offers the generic
/// accessors they build on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    /// Response payload with the success marker stripped.
    body: String,
}

impl CommandResponse {
    /// Returns the processed body.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, returning the processed body.
    #[inline]
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }

    /// Returns `true` if the body is the literal `true`.
    ///
    /// Convenience for boolean-valued commands, which reply `true`/`false`.
    #[inline]
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.body == "true"
    }
}

// ============================================================================
// Decoding
// ============================================================================

impl CommandResponse {
    /// Classifies a complete response body for the given command.
    ///
    /// A leading `OK,` is stripped from success bodies; a bare `OK` (or any
    /// unrecognized prefix) is kept verbatim. A leading `ERROR` produces
    /// [`Error::Command`] whose message reads `name(arg1, arg2): text`,
    /// with the raw body attached for inspection.
    ///
    /// Stripping is anchored at offset 0. An `OK,` occurring later in the
    /// body is payload and stays intact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] when the body carries the `ERROR` marker.
    pub fn decode(request: &CommandRequest, body: String) -> Result<Self> {
        if body.starts_with("ERROR") {
            // "ERROR:" plus any run of spaces is the marker; a bare "ERROR"
            // without colon is already the whole message.
            let raw = match body.strip_prefix("ERROR:") {
                Some(rest) => rest.trim_start_matches(' '),
                None => body.as_str(),
            };
            let message = format!("{}({}): {}", request.name(), request.display_args(), raw);
            debug!(command = request.name(), %message, "command rejected");
            return Err(Error::command(message, body));
        }

        let processed = match body.strip_prefix("OK,") {
            Some(rest) => rest.to_string(),
            None => body,
        };

        trace!(
            command = request.name(),
            len = processed.len(),
            "command succeeded"
        );
        Ok(Self { body: processed })
    }
}

// ============================================================================
// Tests
// ============================================================================
