//! Wire protocol for the Selenium RC driver endpoint.
//!
//! This module defines how commands and responses cross the HTTP boundary.
//!
//! # Protocol Overview
//!
//! | Direction | Shape |
//! |-----------|-------|
//! | Client → Server | `GET /selenium-server/driver/?cmd=<name>&1=<a1>&…` |
//! | Server → Client | plain-text body: `OK[,payload]` or `ERROR: message` |
//!
//! One HTTP round trip per command; no framing beyond the leading marker.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Command requests and wire path construction |
//! | `response` | OK/ERROR body classification |

// ============================================================================
// Submodules
// ============================================================================

/// Command requests and wire path construction.
pub mod command;

/// Response body classification.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{CommandRequest, DRIVER_ENDPOINT, NEW_SESSION_COMMAND};
pub use response::CommandResponse;
