use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_or};

fn default_max_results() -> usize {
    100
}

/// What to do when an enrichment phase (examples, sentences, similar kanji) fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentMode {
    #[default]
    Degrade,
    Fail,
}

impl FromStr for EnrichmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrade" => Ok(EnrichmentMode::Degrade),
            "fail" => Ok(EnrichmentMode::Fail),
            other => Err(format!("unknown enrichment policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub enrichment: EnrichmentMode,
}

impl SearchConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            max_results: parse_or(lookup, "SEARCH_MAX_RESULTS", default_max_results())?,
            enrichment: parse_or(lookup, "ENRICHMENT_POLICY", EnrichmentMode::default())?,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            enrichment: EnrichmentMode::default(),
        }
    }
}
