//! Front-end configuration.
//!
//! The defaults are compiled in from `config.toml`; the API base path can be
//! overridden at build time with `POLIZAS_API_BASE`.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_path: String,
    #[serde(default = "default_read_retries")]
    pub read_retries: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub default_ttl_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
}

fn default_read_retries() -> u32 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api/v1".to_string(),
                read_retries: default_read_retries(),
            },
            notifications: NotificationConfig {
                default_ttl_ms: 3000,
            },
            list: ListConfig {
                default_page_size: 10,
            },
        }
    }
}

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration and apply build-time overrides
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(base) = option_env!("POLIZAS_API_BASE") {
        config.api.base_path = base.to_string();
    }
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("invalid embedded config, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}
