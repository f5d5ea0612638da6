//! Type-safe identifiers for remote sessions.
//!
//! Newtype wrappers keep opaque server-assigned strings from mixing with
//! ordinary text at compile time.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SessionId
// ============================================================================

/// Opaque session identifier assigned by the remote server.
///
/// The server returns this id from `getNewBrowserSession`; it is threaded
/// onto every subsequent command as the `sessionId` query parameter. The id
/// is assumed to be URL-safe and is never inspected or generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session id from a server-provided string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the inner string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = SessionId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_display() {
        let id = SessionId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_into_string() {
        let id = SessionId::new("abc123");
        assert_eq!(id.into_string(), "abc123");
    }

    #[test]
    fn test_equality() {
        assert_eq!(SessionId::from("a"), SessionId::new("a"));
        assert_ne!(SessionId::from("a"), SessionId::new("b"));
    }
}
