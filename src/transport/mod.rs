pub mod gateway;
pub mod rpc;
