//! Command requests and wire path construction.
//!
//! A command is a named remote operation with positional string arguments.
//! On the wire it becomes a single GET path against the fixed driver
//! endpoint:
//!
//! ```text
//! /selenium-server/driver/?cmd=<name>&1=<arg1>&2=<arg2>[&sessionId=<id>]
//! ```
//!
//! Arguments are percent-encoded and named by their 1-based ordinal
//! position. The session id, when present, rides along unencoded as a
//! trailing parameter (server-assigned ids are URL-safe).

// ============================================================================
// Imports
// ============================================================================

use crate::identifiers::SessionId;

// ============================================================================
// Constants
// ============================================================================

/// Fixed server endpoint every command is issued against.
pub const DRIVER_ENDPOINT: &str = "/selenium-server/driver/";

/// The command that establishes a session.
///
/// It is the only command that never carries a `sessionId` parameter, even
/// when one is already held.
pub const NEW_SESSION_COMMAND: &str = "getNewBrowserSession";

// ============================================================================
// CommandRequest
// ============================================================================

/// A named command with ordered string arguments.
///
/// Transient value: built per call, encoded into a request path, then
/// dropped. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Command identifier, e.g. `getNewBrowserSession`.
    name: String,
    /// Positional arguments, in wire order.
    args: Vec<String>,
}

// ============================================================================
// Constructors
// ============================================================================

impl CommandRequest {
    /// Creates a command with no arguments.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a command with the given arguments.
    #[inline]
    #[must_use]
    pub fn with_args(
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a single argument.
    #[inline]
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl CommandRequest {
    /// Returns the command name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the positional arguments.
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns `true` if a held session id should be threaded onto this
    /// command.
    ///
    /// Every command except [`NEW_SESSION_COMMAND`] is session-scoped.
    #[inline]
    #[must_use]
    pub fn is_session_scoped(&self) -> bool {
        self.name != NEW_SESSION_COMMAND
    }

    /// Joins the arguments with `", "` for diagnostics.
    ///
    /// Used to format command-error messages as `name(arg1, arg2): text`.
    #[must_use]
    pub fn display_args(&self) -> String {
        self.args.join(", ")
    }
}

// ============================================================================
// Path Construction
// ============================================================================

impl CommandRequest {
    /// Builds the request path, threading `session_id` if given.
    ///
    /// The command name and session id are emitted verbatim; each argument
    /// is percent-encoded and keyed by its 1-based ordinal.
    #[must_use]
    pub fn path(&self, session_id: Option<&SessionId>) -> String {
        let mut path = String::with_capacity(
            DRIVER_ENDPOINT.len() + 5 + self.name.len() + self.args.len() * 16,
        );
        path.push_str(DRIVER_ENDPOINT);
        path.push_str("?cmd=");
        path.push_str(&self.name);

        for (i, arg) in self.args.iter().enumerate() {
            path.push('&');
            path.push_str(&(i + 1).to_string());
            path.push('=');
            path.push_str(&urlencoding::encode(arg));
        }

        if let Some(sid) = session_id {
            path.push_str("&sessionId=");
            path.push_str(sid.as_str());
        }

        path
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_path_without_args() {
        let cmd = CommandRequest::new("testComplete");
        assert_eq!(cmd.path(None), "/selenium-server/driver/?cmd=testComplete");
    }

    #[test]
    fn test_path_encodes_args() {
        let cmd = CommandRequest::with_args("click", ["id=foo"]);
        assert_eq!(
            cmd.path(None),
            "/selenium-server/driver/?cmd=click&1=id%3Dfoo"
        );
    }

    #[test]
    fn test_path_orders_ordinals() {
        let cmd = CommandRequest::with_args("getNewBrowserSession", ["*firefox", "http://e.com"]);
        assert_eq!(
            cmd.path(None),
            "/selenium-server/driver/?cmd=getNewBrowserSession\
             &1=%2Afirefox&2=http%3A%2F%2Fe.com"
        );
    }

    #[test]
    fn test_path_appends_session_id() {
        let sid = SessionId::new("abc123");
        let cmd = CommandRequest::with_args("click", ["id=foo"]);
        let path = cmd.path(Some(&sid));
        assert!(path.ends_with("&sessionId=abc123"));
    }

    #[test]
    fn test_arg_builder() {
        let cmd = CommandRequest::new("type").arg("id=q").arg("hello world");
        assert_eq!(cmd.args(), ["id=q", "hello world"]);
        assert_eq!(
            cmd.path(None),
            "/selenium-server/driver/?cmd=type&1=id%3Dq&2=hello%20world"
        );
    }

    #[test]
    fn test_session_scoping() {
        assert!(CommandRequest::new("click").is_session_scoped());
        assert!(!CommandRequest::new(NEW_SESSION_COMMAND).is_session_scoped());
    }

    #[test]
    fn test_display_args() {
        let cmd = CommandRequest::with_args("click", ["id=foo", "fast"]);
        assert_eq!(cmd.display_args(), "id=foo, fast");

        let bare = CommandRequest::new("testComplete");
        assert_eq!(bare.display_args(), "");
    }

    proptest! {
        /// Every argument value survives percent-encoding: decoding the
        /// ordinal parameters back out of the path yields the original
        /// arguments, and no raw separator leaks into a value.
        #[test]
        fn prop_args_survive_encoding(args in proptest::collection::vec(".*", 0..4)) {
            let cmd = CommandRequest::with_args("cmdName", args.clone());
            let path = cmd.path(None);

            let query = path.strip_prefix("/selenium-server/driver/?").unwrap();
            let params: Vec<&str> = query.split('&').collect();
            prop_assert_eq!(params.len(), args.len() + 1);
            prop_assert_eq!(params[0], "cmd=cmdName");

            for (i, arg) in args.iter().enumerate() {
                let (key, value) = params[i + 1].split_once('=').unwrap();
                prop_assert_eq!(key, (i + 1).to_string());
                prop_assert_eq!(urlencoding::decode(value).unwrap(), arg.as_str());
            }
        }
    }
}
