//! HTTP transport layer.
//!
//! This module carries command paths to the remote server and returns the
//! raw response bodies.
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Client (Rust)  │       HTTP GET               │  RC Server      │
//! │                 │─────────────────────────────►│                 │
//! │  Transport      │   /selenium-server/driver/   │  plain-text     │
//! │  (one GET per   │◄─────────────────────────────│  OK / ERROR     │
//! │   command)      │       UTF-8 body             │  reply          │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! Each command opens its own connection; two commands issued without
//! awaiting the first may resolve in either order.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `http` | `Transport` trait and the default reqwest-backed GET transport |

// ============================================================================
// Submodules
// ============================================================================

/// HTTP GET transport and the injectable transport seam.
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{Endpoint, HttpTransport, Transport};
