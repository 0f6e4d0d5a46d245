use serde::{Deserialize, Serialize};

/// Where `verified-card call` sends its JSON-RPC envelopes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    #[serde(default = "default_rpc_url")]
    pub url: String,
    /// Target address placed in the `to` field of `gl_call` params.
    #[serde(default)]
    pub contract_address: Option<String>,
}

fn default_rpc_url() -> String {
    "http://127.0.0.1:8545".into()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_rpc_url(),
            contract_address: None,
        }
    }
}
