use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_or};

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8001/ocr".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// manga-ocr inference endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl OcrConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            enabled: parse_or(lookup, "OCR_ENABLED", default_enabled())?,
            endpoint: lookup("OCR_ENDPOINT").unwrap_or_else(default_endpoint),
            timeout_seconds: parse_or(lookup, "OCR_TIMEOUT_SECONDS", default_timeout_seconds())?,
        })
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
