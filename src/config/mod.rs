use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::ShowReviewError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub base_id: String,
    pub table_id: String,
    /// Holds the name of the environment variable in the config file; replaced
    /// by the secret itself once loaded.
    pub api_key: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub store: StoreConfig,
}

fn default_api_url() -> String {
    consts::DEFAULT_STORE_API_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    consts::CONNECT_TIMEOUT_SECS
}

fn default_read_timeout() -> u64 {
    consts::READ_TIMEOUT_SECS
}

fn default_host() -> String {
    consts::SERVER_HOST.to_string()
}

fn default_port() -> u16 {
    consts::SERVER_PORT
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, ShowReviewError>;
}

pub struct FileConfigLoader {
    path: String,
}

impl FileConfigLoader {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let path = std::env::var(consts::CONFIG_FILE_ENV)
            .unwrap_or(consts::DEFAULT_CONFIG_FILE.to_string());
        Self::new(&path)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, ShowReviewError> {
        log::info!("loading config from {}", self.path);
        let config_str = std::fs::read_to_string(&self.path)?;
        parse_config(&config_str, |name| std::env::var(name).ok())
    }
}

/// Parses the config document and resolves the store secret through `lookup_env`.
pub fn parse_config<F>(config_str: &str, lookup_env: F) -> Result<Config, ShowReviewError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: Config = serde_json::from_str(config_str)
        .map_err(|e| ShowReviewError::ConfigError(format!("invalid config: {}", e)))?;

    if config.store.base_id.trim().is_empty() || config.store.table_id.trim().is_empty() {
        return Err(ShowReviewError::ConfigError(
            "store.base_id and store.table_id must be set".to_string(),
        ));
    }

    let key_var = config.store.api_key.clone();
    config.store.api_key = match lookup_env(&key_var) {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Err(ShowReviewError::ConfigError(format!(
                "environment variable {} with the store api key is not set",
                key_var
            )));
        }
    };

    Ok(config)
}

pub fn load_config() -> Result<Config, ShowReviewError> {
    let loader = FileConfigLoader::from_env();
    loader.load_config()
}
