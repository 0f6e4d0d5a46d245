use tempfile::TempDir;
use verified_card::Config;

#[test]
fn minimal_toml_gets_documented_defaults() {
    let config: Config = toml::from_str("").expect("empty config should parse");

    assert_eq!(config.provider, "openrouter");
    assert!((config.temperature - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.request_timeout_secs, 60);
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 8545);
    assert!(!config.gateway.allow_public_bind);
    assert_eq!(config.rpc.url, "http://127.0.0.1:8545");
    assert!(config.rpc.contract_address.is_none());
}

#[test]
fn nested_tables_override_defaults() {
    let config: Config = toml::from_str(
        r#"
provider = "groq"
model = "llama-3.3-70b-versatile"
temperature = 0.0

[gateway]
port = 9000

[rpc]
url = "http://node.local:4000/api"
contract_address = "0xfeed"
"#,
    )
    .expect("config should parse");

    assert_eq!(config.provider, "groq");
    assert_eq!(config.model.as_deref(), Some("llama-3.3-70b-versatile"));
    assert_eq!(config.gateway.port, 9000);
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.rpc.contract_address.as_deref(), Some("0xfeed"));
    assert!(config.validate().is_ok());
}

#[test]
fn out_of_range_temperature_fails_validation() {
    let config: Config = toml::from_str("temperature = 3.5").expect("config should parse");
    assert!(config.validate().is_err());
}

#[test]
fn saved_config_reloads_identically() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut config: Config = toml::from_str("provider = \"ollama\"").expect("config should parse");
    config.config_path = dir.path().join("config.toml");
    config.save().expect("config should save");

    let raw = std::fs::read_to_string(&config.config_path).expect("config file should exist");
    let reloaded: Config = toml::from_str(&raw).expect("saved config should parse");
    assert_eq!(reloaded.provider, "ollama");
    assert_eq!(reloaded.gateway.port, config.gateway.port);
}
