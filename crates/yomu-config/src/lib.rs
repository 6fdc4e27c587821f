use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::ocr::OcrConfig;
use self::search::SearchConfig;
use self::server::ServerConfig;

pub mod dictionary;
pub mod ocr;
pub mod search;
pub mod server;

pub use search::EnrichmentMode;
pub use server::LogFormat;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Port must be > 0")]
    InvalidPort,

    #[error("Body limit must be > 0 bytes")]
    InvalidBodyLimit,

    #[error("Search max results must be > 0")]
    InvalidMaxResults,

    #[error("CORS_ORIGINS cannot contain '*' because credentials are allowed; list the origins")]
    WildcardCorsOrigin,

    #[error("OCR is enabled but OCR_ENDPOINT is blank")]
    MissingOcrEndpoint,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub ocr: OcrConfig,
    pub search: SearchConfig,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            server: ServerConfig::from_lookup(&lookup)?,
            dictionary: DictionaryConfig::from_lookup(&lookup),
            ocr: OcrConfig::from_lookup(&lookup)?,
            search: SearchConfig::from_lookup(&lookup)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::InvalidBodyLimit);
        }
        if self.server.allows_any_origin() {
            return Err(ConfigError::WildcardCorsOrigin);
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::InvalidMaxResults);
        }
        if self.ocr.enabled && self.ocr.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingOcrEndpoint);
        }
        Ok(())
    }
}

/// Parse `key` if set, `default` if unset or blank
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value })
        }
        _ => Ok(default),
    }
}

/// Comma-separated list, blank items dropped
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
