//! Mock JSON-RPC gateway.
//!
//! Stands in for the real verification backend during integration tests:
//! every `POST /` gets the same canonical "verified" result, wrapped in a
//! JSON-RPC envelope that echoes the caller's `jsonrpc` and `id`.
//!
//! - Request body size limit (64KB max)
//! - Request timeout (30s)
//! - No shared state, no authentication

mod handlers;
mod server;

pub use server::{build_app, run_gateway, run_gateway_with_listener};

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
