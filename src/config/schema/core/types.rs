use super::super::{GatewayConfig, RpcConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(super) const CONFIG_DIR_NAME: &str = ".verified-card";
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    #[serde(default = "default_provider")]
    pub provider: String,
    pub model: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound for a single generation call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub rpc: RpcConfig,
}

fn default_provider() -> String {
    "openrouter".into()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            api_key: None,
            provider: default_provider(),
            model: None,
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            gateway: GatewayConfig::default(),
            rpc: RpcConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if self.provider.trim().is_empty() {
            return Err(ConfigError::Validation("provider must not be empty".into()));
        }
        Ok(())
    }
}
