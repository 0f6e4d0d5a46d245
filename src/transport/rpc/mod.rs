//! Minimal JSON-RPC 2.0 plumbing shared by the mock gateway and its caller.

pub mod client;
pub mod envelope;

pub use client::RpcClient;
pub use envelope::{JSONRPC_VERSION, RpcErrorObject, RpcRequest, RpcResponse};
