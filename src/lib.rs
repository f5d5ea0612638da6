//! Selenium RC client - Async remote browser automation over HTTP.
//!
//! This library speaks the Selenium RC wire convention: one session per
//! client instance, textual commands issued as HTTP GET requests against a
//! fixed driver endpoint, single-line `OK`/`ERROR` replies.
//!
//! # Architecture
//!
//! The client follows a thin request/response model:
//!
//! - **Local end (Rust)**: encodes commands into query-string paths,
//!   classifies plain-text replies
//! - **Remote end (RC server)**: drives the browser, answers `OK`/`ERROR`
//!
//! Key design points:
//!
//! - Each [`Client`] holds at most one session id, threaded onto every
//!   session-scoped command
//! - One HTTP connection per command; no reuse, no retry, no ordering
//!   guarantee between commands issued concurrently
//! - Responses are classified once at the protocol boundary into a tagged
//!   success/error result
//! - The transport is an injectable trait, so tests substitute a fake
//!   without process-wide state
//!
//! # Quick Start
//!
//! ```no_run
//! use selenium_rc::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .host("localhost")
//!         .port(4444)
//!         .browser("firefox")
//!         .url("http://example.com")
//!         .build();
//!
//!     let sid = client.start_session().await?;
//!     println!("session: {sid}");
//!
//!     client.command("open", ["/login"]).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`], [`ClientBuilder`], [`ClientConfig`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Command paths and OK/ERROR decoding |
//! | [`transport`] | HTTP GET transport (injectable) |

// ============================================================================
// Modules
// ============================================================================

/// Session client: configuration, builder, and command execution.
///
/// Use [`Client::builder()`] to create a configured client instance.
pub mod client;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for remote sessions.
pub mod identifiers;

/// Wire protocol: command paths and response classification.
pub mod protocol;

/// HTTP transport layer.
///
/// The [`Transport`] trait is the seam for substituting a fake in tests.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Client types
pub use client::{Client, ClientBuilder, ClientConfig, DEFAULT_HOST, DEFAULT_PORT};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::SessionId;

// Protocol types
pub use protocol::{CommandRequest, CommandResponse};

// Transport types
pub use transport::{Endpoint, HttpTransport, Transport};
