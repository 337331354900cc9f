use config::{Config, File};
use serde::Deserialize;

use crate::error::BreatherError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BreatherConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl BreatherConfig {
    /// Load config from a TOML file. The file is optional; every section
    /// falls back to its default, so a missing file yields the stock
    /// 0.0.0.0:8080 listener.
    pub fn load(path: &str) -> Result<Self, BreatherError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}
