use super::Config;
use super::types::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{ConfigError, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.verified-card/config.toml`, writing a default file on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("could not find home directory".into()))?;
        Self::load_or_init_in(&home.join(CONFIG_DIR_NAME))
    }

    /// Same as [`Config::load_or_init`], rooted at an explicit directory.
    pub fn load_or_init_in(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ConfigError::from)?;
        }

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(ConfigError::from)?;
            let mut config: Config = toml::from_str(&contents).map_err(|e| {
                ConfigError::Load(format!("{}: {e}", config_path.display()))
            })?;
            config.config_path.clone_from(&config_path);
            config
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        tracing::debug!(path = %config.config_path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self) -> std::result::Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&self.config_path, toml_str)?;
        Ok(())
    }
}
