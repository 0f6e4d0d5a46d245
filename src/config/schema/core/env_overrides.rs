use super::Config;

fn first_non_empty(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = first_non_empty(&["VERIFIED_CARD_API_KEY", "API_KEY"]) {
            self.api_key = Some(key);
        }

        if let Some(provider) = first_non_empty(&["VERIFIED_CARD_PROVIDER"]) {
            self.provider = provider;
        }

        if let Some(model) = first_non_empty(&["VERIFIED_CARD_MODEL"]) {
            self.model = Some(model);
        }

        if let Some(temp_str) = first_non_empty(&["VERIFIED_CARD_TEMPERATURE"])
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = temp;
        }

        if let Some(host) = first_non_empty(&["VERIFIED_CARD_GATEWAY_HOST"]) {
            self.gateway.host = host;
        }

        if let Some(port_str) = first_non_empty(&["VERIFIED_CARD_GATEWAY_PORT"])
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Some(url) = first_non_empty(&["VERIFIED_CARD_RPC_URL", "GENLAYER_RPC_URL"]) {
            self.rpc.url = url;
        }

        if let Some(address) =
            first_non_empty(&["VERIFIED_CARD_CONTRACT_ADDRESS", "GENLAYER_CONTRACT_ADDRESS"])
        {
            self.rpc.contract_address = Some(address);
        }
    }
}
