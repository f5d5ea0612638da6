//! Session client core.
//!
//! [`Client`] owns the connection parameters, the transport, and the one
//! session id the instance may hold. Lifecycle per instance:
//!
//! ```text
//! Unconfigured ──build()──► Configured ──start_session()──► SessionActive
//! ```
//!
//! Commands other than `getNewBrowserSession` are legal before a session
//! exists; they simply omit the `sessionId` parameter (the server will
//! generally reject them). There is no terminal state; the session handle
//! lives until the client is dropped.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::identifiers::SessionId;
use crate::protocol::{CommandRequest, CommandResponse, NEW_SESSION_COMMAND};
use crate::transport::{HttpTransport, Transport};

use super::builder::ClientBuilder;
use super::config::ClientConfig;

// ============================================================================
// Client
// ============================================================================

/// Client for one remote browser session.
///
/// Commands are issued through [`command`](Self::command); each one is an
/// independent HTTP round trip. Two commands awaited concurrently may
/// resolve in any order, so sequence [`start_session`](Self::start_session)
/// before anything that depends on the session id.
///
/// # Example
///
/// ```no_run
/// use selenium_rc::{Client, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let client = Client::builder()
///         .browser("firefox")
///         .url("http://example.com")
///         .build();
///
///     client.start_session().await?;
///     client.command("open", ["/login"]).await?;
///     Ok(())
/// }
/// ```
pub struct Client {
    /// Immutable connection parameters.
    config: ClientConfig,
    /// Transport commands are issued through.
    transport: Arc<dyn Transport>,
    /// Session id, written once by a successful `start_session`.
    session_id: Mutex<Option<SessionId>>,
}

// ============================================================================
// Construction
// ============================================================================

impl Client {
    /// Returns a builder for fluent configuration.
    #[inline]
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client over the default HTTP transport.
    ///
    /// No I/O is performed; an incomplete config fails at
    /// [`start_session`](Self::start_session).
    #[inline]
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Creates a client over an explicit transport.
    #[inline]
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            session_id: Mutex::new(None),
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Client {
    /// Returns the connection configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the held session id, if a session has been started.
    #[inline]
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id.lock().clone()
    }
}

// ============================================================================
// Operations
// ============================================================================

impl Client {
    /// Establishes a new browser session.
    ///
    /// Issues `getNewBrowserSession` with the configured browser and start
    /// URL. The response body is the server-assigned session id, which is
    /// stored on the client and threaded onto subsequent commands.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) if the browser or URL is
    ///   unset; checked before any network call.
    /// - [`Error::Transport`](crate::Error::Transport) /
    ///   [`Error::Command`](crate::Error::Command) propagated unchanged
    ///   from the round trip. The stored session id is only written on
    ///   success.
    pub async fn start_session(&self) -> Result<SessionId> {
        let (browser, url) = self.config.session_params()?;
        let request = CommandRequest::with_args(NEW_SESSION_COMMAND, [browser, url]);

        let response = self.execute(request).await?;
        let session_id = SessionId::new(response.into_body());

        info!(%session_id, "session started");
        *self.session_id.lock() = Some(session_id.clone());

        Ok(session_id)
    }

    /// Executes a named command with positional arguments.
    ///
    /// The generic entry point higher-level helpers build on. A held
    /// session id is appended to every command except
    /// `getNewBrowserSession`. Pass `None::<&str>` for a command without
    /// arguments.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`](crate::Error::Transport) on connection
    ///   failure.
    /// - [`Error::Command`](crate::Error::Command) when the server replies
    ///   with the `ERROR` convention.
    pub async fn command(
        &self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<CommandResponse> {
        self.execute(CommandRequest::with_args(name, args)).await
    }

    /// One command round trip: build the path, GET it, decode the body.
    async fn execute(&self, request: CommandRequest) -> Result<CommandResponse> {
        // Snapshot the session id before awaiting; the guard must not be
        // held across the round trip.
        let session_id = if request.is_session_scoped() {
            self.session_id.lock().clone()
        } else {
            None
        };

        let path = request.path(session_id.as_ref());
        debug!(command = request.name(), %path, "issuing command");

        let body = self.transport.get(&self.config.endpoint(), &path).await?;
        CommandResponse::decode(&request, body)
    }
}

// ============================================================================
// Tests
// ============================================================================
