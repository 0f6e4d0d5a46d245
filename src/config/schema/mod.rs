mod core;
mod gateway;
mod rpc;

pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use rpc::RpcConfig;
