//! Session client: configuration, builder, and command execution.
//!
//! One [`Client`] instance drives one remote browser session. Configure it
//! through [`Client::builder()`], establish the session with
//! [`Client::start_session`], then issue commands through
//! [`Client::command`].
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `builder` | Fluent [`ClientBuilder`] |
//! | `config` | [`ClientConfig`] defaults, normalization, preconditions |
//! | `core` | [`Client`] operations and session threading |

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder for [`Client`].
pub mod builder;

/// Connection configuration.
pub mod config;

/// Client core and command execution.
pub mod core;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ClientBuilder;
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use core::Client;
